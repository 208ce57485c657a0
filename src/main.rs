use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use boggle_solver::boggle::format::encode::write_word_set;
use boggle_solver::{BoardShape, Boggler, CompactWordSet, Dictionary, WordSet};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boggle")]
#[command(about = "Score Boggle boards and build compact dictionaries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score boards read one per line from files, or stdin
    Score {
        #[command(flatten)]
        solver: SolverArgs,
        /// Files containing boards
        files: Vec<PathBuf>,
    },
    /// List the words found on one board with their cell paths
    Words {
        #[command(flatten)]
        solver: SolverArgs,
        /// Allow the same word again over a different set of cells
        #[arg(long)]
        multiboggle: bool,
        /// Board string, one letter per cell ('.' for a blocked cell)
        board: String,
    },
    /// Build a compact binary dictionary from a word list
    Encode {
        /// Word list, one word per line
        input: PathBuf,
        /// Output file for the binary dictionary
        output: PathBuf,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Size of the board as two digits (22, 23, 33, 34, 44, 45, 55)
    #[arg(long, default_value_t = 33)]
    size: u32,
    /// Path to the dictionary (.bin is memory-mapped, anything else is a word list)
    #[arg(long, default_value = "wordlists/enable2k.bin")]
    dictionary: PathBuf,
}

enum LoadedDictionary {
    Compact(CompactWordSet),
    Trie(WordSet),
}

fn load_dictionary(path: &Path) -> boggle_solver::Result<LoadedDictionary> {
    if path.extension().is_some_and(|ext| ext == "bin") {
        Ok(LoadedDictionary::Compact(CompactWordSet::open(path)?))
    } else {
        Ok(LoadedDictionary::Trie(WordSet::create_from_file(path)?))
    }
}

fn score_boards<D: Dictionary>(
    dict: &mut D,
    shape: BoardShape,
    files: &[PathBuf],
) -> boggle_solver::Result<()> {
    let mut boggler = Boggler::new(dict, shape)?;

    let readers: Vec<Box<dyn BufRead>> = if files.is_empty() {
        vec![Box::new(BufReader::new(io::stdin())) as Box<dyn BufRead>]
    } else {
        files
            .iter()
            .map(|f| File::open(f).map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>))
            .collect::<io::Result<_>>()?
    };

    let start = Instant::now();
    let mut n = 0usize;
    for reader in readers {
        for line in reader.lines() {
            let line = line?;
            let board = line.trim();
            println!("{}: {}", board, boggler.score_or_sentinel(board));
            n += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    eprintln!(
        "{} boards in {:.2}s = {:.2} boards/s",
        n,
        elapsed,
        n as f64 / elapsed.max(f64::EPSILON)
    );
    Ok(())
}

fn print_words<D: Dictionary>(
    dict: &mut D,
    shape: BoardShape,
    board: &str,
    multiboggle: bool,
) -> boggle_solver::Result<()> {
    let mut boggler = Boggler::new(dict, shape)?;
    let paths = boggler.find_words(board, multiboggle)?;
    let letters = boggler.board().cells().to_vec();
    for path in &paths {
        let word: String = path
            .iter()
            .map(|&i| match (b'a' + letters[i]) as char {
                'q' => "qu".to_string(),
                c => c.to_string(),
            })
            .collect();
        println!("{}\t{:?}", word, path);
    }
    println!("{} words", paths.len());
    Ok(())
}

fn run(cli: Cli) -> boggle_solver::Result<()> {
    match cli.command {
        Command::Score { solver, files } => {
            let shape = BoardShape::from_size_code(solver.size)?;
            match load_dictionary(&solver.dictionary)? {
                LoadedDictionary::Compact(mut dict) => score_boards(&mut dict, shape, &files),
                LoadedDictionary::Trie(mut dict) => score_boards(&mut dict, shape, &files),
            }
        }
        Command::Words {
            solver,
            multiboggle,
            board,
        } => {
            let shape = BoardShape::from_size_code(solver.size)?;
            match load_dictionary(&solver.dictionary)? {
                LoadedDictionary::Compact(mut dict) => {
                    print_words(&mut dict, shape, &board, multiboggle)
                }
                LoadedDictionary::Trie(mut dict) => print_words(&mut dict, shape, &board, multiboggle),
            }
        }
        Command::Encode { input, output } => {
            let words = WordSet::create_from_file(&input)?;
            write_word_set(&words, &output)?;
            println!(
                "{}: {} words, {} nodes -> {}",
                input.display(),
                words.size(),
                words.num_nodes(),
                output.display()
            );
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
