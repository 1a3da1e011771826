//! Propositional logic toolkit - Command Line Interface
//!
//! Truth tables, equivalence checks and argument validity from the terminal.
//! Set `RUST_LOG=debug` to see each pipeline stage.

use clap::{Args, Parser, Subcommand};
use prop_logic::table::{Mark, PlainText, TruthLabels};
use prop_logic::{Argument, EquivalenceMode, LogicError, Proposition, TableConfig};
use std::io::{self, Write};
use std::process;

const CHECK_MARK: &str = "✓";
const CROSS_MARK: &str = "✗";

#[derive(Parser, Debug)]
#[command(name = "prop-logic")]
#[command(about = "A propositional logic toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make a truth table using the given propositional statement
    MakeTable {
        /// A propositional statement
        #[arg(value_name = "STATEMENT")]
        statement: String,

        #[command(flatten)]
        table: TableArgs,

        /// Do not include atomic sentences in the table
        #[arg(short = 'n', long = "no-atoms")]
        no_atoms: bool,
    },
    /// Check if the statements are logically equivalent
    CheckEquivalence {
        /// A set of propositional statements to be checked
        #[arg(value_name = "STATEMENT", required = true)]
        statements: Vec<String>,

        #[command(flatten)]
        table: TableArgs,

        /// Print the table of every biconditional and a detailed conclusion
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,

        /// Compare every pair of statements instead of each against the first
        #[arg(short = 'p', long = "pairwise")]
        pairwise: bool,
    },
    /// Check if an argument is valid
    CheckValidity {
        /// A set of premises
        #[arg(value_name = "PREMISE", required = true)]
        premises: Vec<String>,

        /// The conclusion of the argument
        #[arg(short = 'c', long = "conclusion")]
        conclusion: String,

        #[command(flatten)]
        table: TableArgs,
    },
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
struct TableArgs {
    /// Custom labels for truth values, true first (e.g. TF)
    #[arg(short = 'l', long = "labels", value_name = "[TRUE][FALSE]")]
    labels: Option<String>,

    /// Reverse the order of the truth values in the table
    #[arg(short = 'r', long = "reverse-values")]
    reverse_values: bool,
}

impl TableArgs {
    fn config(&self) -> Result<TableConfig, LogicError> {
        let labels = self
            .labels
            .as_deref()
            .map(TruthLabels::parse)
            .transpose()?;
        Ok(TableConfig {
            reverse_order: self.reverse_values,
            labels,
            ..TableConfig::default()
        })
    }
}

fn make_table(statement: &str, table: &TableArgs, no_atoms: bool) -> io::Result<()> {
    let config = TableConfig {
        include_atomic_columns: !no_atoms,
        ..table.config()?
    };
    let prop = Proposition::new(statement.trim(), config)?;

    let stdout = io::stdout();
    prop.write_table(&mut PlainText::new(stdout.lock()))
}

fn check_equivalence(
    statements: &[String],
    table: &TableArgs,
    verbose: bool,
    pairwise: bool,
) -> io::Result<bool> {
    let statements: Vec<&str> = statements.iter().map(|s| s.trim()).collect();
    let argument = Argument::from_statements(&statements, None, table.config()?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !verbose {
        argument.write_table(&mut PlainText::new(&mut out), Some(Mark::Equivalent))?;
    }

    let mode = if pairwise {
        EquivalenceMode::Pairwise
    } else {
        EquivalenceMode::Direct
    };
    let report = argument.test_equivalence(mode)?;

    if verbose || pairwise {
        for test in &report.tests {
            let (left, right) = (statements[test.left], statements[test.right]);
            if verbose {
                writeln!(out)?;
                test.biconditional
                    .write_table(&mut PlainText::new(&mut out))?;
            }
            let verdict = if test.equivalent {
                format!("{} {:?} and {:?} are equivalent", CHECK_MARK, left, right)
            } else {
                format!("{} {:?} and {:?} are not equivalent", CROSS_MARK, left, right)
            };
            if test.same_shape {
                writeln!(out, "{} (same shape)", verdict)?;
            } else {
                writeln!(out, "{}", verdict)?;
            }
        }
        writeln!(out)?;
    }

    Ok(report.is_equivalent())
}

fn check_validity(premises: &[String], conclusion: &str, table: &TableArgs) -> io::Result<bool> {
    let premises: Vec<&str> = premises.iter().map(|s| s.trim()).collect();
    let argument = Argument::from_statements(&premises, Some(conclusion.trim()), table.config()?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    argument.write_table(&mut PlainText::new(&mut out), Some(Mark::Counterexample))?;

    let validity = argument.is_valid()?;
    if let Some(countermodel) = &validity.countermodel {
        writeln!(out, "Countermodel: {}", countermodel)?;
    }
    Ok(validity.valid)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::MakeTable {
            statement,
            table,
            no_atoms,
        } => make_table(statement, table, *no_atoms).map(|()| None),
        Command::CheckEquivalence {
            statements,
            table,
            verbose,
            pairwise,
        } => check_equivalence(statements, table, *verbose, *pairwise).map(|equivalent| {
            Some(if equivalent {
                format!("{} The statements are logically equivalent!", CHECK_MARK)
            } else {
                format!("{} The statements are not logically equivalent!", CROSS_MARK)
            })
        }),
        Command::CheckValidity {
            premises,
            conclusion,
            table,
        } => check_validity(premises, conclusion, table).map(|valid| {
            Some(if valid {
                format!("{} The argument is valid!", CHECK_MARK)
            } else {
                format!("{} The argument is invalid!", CROSS_MARK)
            })
        }),
    };

    match result {
        Ok(Some(verdict)) => println!("{}", verdict),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
