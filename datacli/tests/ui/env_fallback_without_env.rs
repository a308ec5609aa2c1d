use datacli::DataCli;

#[derive(DataCli)]
struct Orphan {
    #[datacli(env_fallback = "x")]
    field: String,
}

fn main() {}
