use datacli::DataCli;

#[derive(DataCli)]
struct Clash {
    first_name: String,
    #[datacli(cli_long = "first-name")]
    other: String,
}

fn main() {}
