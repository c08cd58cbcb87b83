use comfy_table::{ContentArrangement, Table};

use bw_board::Board;

use super::{OutputFormat, heading, print_json};

pub fn run(format: OutputFormat) -> Result<(), String> {
    let board = Board::standard();

    match format {
        OutputFormat::Json => print_json(&board.squares()),
        OutputFormat::Plain => {
            for square in board.squares() {
                println!("{} {} {}", square.index, square.label, square.kind);
            }
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", heading("Board"));
            println!();
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Square", "Kind"]);
            for square in board.squares() {
                table.add_row(vec![
                    square.index.to_string(),
                    square.label.clone(),
                    square.kind.to_string(),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
