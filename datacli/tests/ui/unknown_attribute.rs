use datacli::DataCli;

#[derive(DataCli)]
struct Typo {
    #[datacli(cli_lng = "x")]
    field: String,
}

fn main() {}
