use datacli::DataCli;

#[derive(DataCli)]
struct Bad {
    #[datacli(cli_short = '?')]
    field: String,
}

fn main() {}
