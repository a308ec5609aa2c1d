//! Trybuild fixture verifying `#[datacli(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use datacli as cli;
use cli::DataCli;

#[derive(Debug, DataCli)]
#[datacli(crate = "cli")]
struct Aliased {
    #[datacli(default = 1)]
    count: u32,
    #[datacli(env = "ALIASED_NAME", env_fallback = "alias")]
    name: String,
}

fn main() {
    let result: cli::DatacliResult<Aliased> = Aliased::try_parse_from(Vec::<String>::new());
    let _ = result.map(|aliased| (aliased.count, aliased.name));
}
