//! Interactive command session over a box dataset.
//!
//! The shell reads one command per line from stdin:
//!
//! ```text
//! merge <category1> <category2> <new_category>
//! rename <old_label> <new_label>
//! translate
//! exit
//! ```
//!
//! Failed commands are reported and the session continues with the
//! dataset unchanged. After every successful `merge` or `rename` the
//! dataset is rewritten to the output CSV; `translate` writes the JSON
//! export. EOF on stdin ends the session like `exit`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::BoxmergeError;
use crate::ir::{io_csv, io_json};
use crate::merge::merge_categories;

/// Runs an interactive session over the dataset at `input`.
pub fn run_shell(input: &Path, output: &Path, export_path: &Path) -> Result<(), BoxmergeError> {
    let mut dataset = io_csv::read_csv(input)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("/-: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        let Some(command) = words.first() else {
            println!("Please provide an input!");
            continue;
        };

        match command.to_lowercase().as_str() {
            "exit" => break,
            "merge" => {
                if words.len() != 4 {
                    println!(
                        "Merge: wrong arguments\n\
                         Please provide 3 arguments [category1, category2, new_category]"
                    );
                    continue;
                }
                match merge_categories(&mut dataset, words[1], words[2], words[3]) {
                    Ok(()) => io_csv::write_csv(output, &dataset)?,
                    Err(err) => println!("Merge failed: {err}"),
                }
            }
            "rename" => {
                if words.len() != 3 {
                    println!(
                        "Rename: wrong arguments\n\
                         Please provide 2 arguments [old_label, new_label]"
                    );
                    continue;
                }
                match dataset.rename(words[1], words[2]) {
                    Ok(()) => io_csv::write_csv(output, &dataset)?,
                    Err(err) => println!("Rename failed: {err}"),
                }
            }
            "translate" => io_json::write_export_json(export_path, &dataset)?,
            _ => println!("Unknown command"),
        }
    }

    Ok(())
}
