//! Logged-in session menu
//!
//! Income, expense and budget entry, summary viewing and export for the
//! account that logged in. Input mistakes are reported and the menu is shown
//! again; nothing here ends the session except logout or end of input.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::display::format_summary;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, Money};
use crate::services::LedgerService;

use super::prompt::Prompter;
use super::MenuContext;

const SESSION_MENU: &str = "\n\
1. Add income\n\
2. Add expense\n\
3. Set budget\n\
4. View summary\n\
5. Export summary to file\n\
6. Log out";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Logout,
    EndOfInput,
}

/// A category and amount read from the user
enum EntryInput {
    Ready { category: String, amount: Money },
    Rejected(FinanceError),
    EndOfInput,
}

/// Run the session menu until logout or end of input
pub fn run_session<R: BufRead, W: Write>(
    account: &mut Account,
    ctx: &MenuContext<'_>,
    prompter: &mut Prompter<R, W>,
) -> FinanceResult<SessionEnd> {
    let mut service = LedgerService::new(account, ctx.audit);

    loop {
        prompter.say(SESSION_MENU)?;
        let choice = match prompter.prompt("Choose an option: ")? {
            Some(choice) => choice,
            None => return Ok(SessionEnd::EndOfInput),
        };

        match choice.trim() {
            "1" => match read_entry(prompter, "income")? {
                EntryInput::Ready { category, amount } => {
                    match service.add_income(&category, amount) {
                        Ok(()) => prompter.say("Income added.")?,
                        Err(e) => prompter.say(e)?,
                    }
                }
                EntryInput::Rejected(e) => prompter.say(e)?,
                EntryInput::EndOfInput => return Ok(SessionEnd::EndOfInput),
            },
            "2" => match read_entry(prompter, "expense")? {
                EntryInput::Ready { category, amount } => {
                    match service.add_expense(&category, amount) {
                        Ok(notices) => {
                            prompter.say("Expense added.")?;
                            for notice in notices {
                                prompter.say(notice)?;
                            }
                        }
                        Err(e) => prompter.say(e)?,
                    }
                }
                EntryInput::Rejected(e) => prompter.say(e)?,
                EntryInput::EndOfInput => return Ok(SessionEnd::EndOfInput),
            },
            "3" => match read_entry(prompter, "budget")? {
                EntryInput::Ready { category, amount } => {
                    match service.set_budget(&category, amount) {
                        Ok(None) => prompter.say("Budget set.")?,
                        Ok(Some(previous)) => {
                            prompter.say(format!("Budget updated (was {}).", previous))?
                        }
                        Err(e) => prompter.say(e)?,
                    }
                }
                EntryInput::Rejected(e) => prompter.say(e)?,
                EntryInput::EndOfInput => return Ok(SessionEnd::EndOfInput),
            },
            "4" => match service.summary() {
                Ok(summary) => {
                    prompter.write_raw(&format_summary(&summary, &ctx.settings.summary_labels))?
                }
                Err(e) => prompter.say(e)?,
            },
            "5" => {
                let filename = match prompter.prompt("Enter a file name for the summary: ")? {
                    Some(name) => name.trim().to_string(),
                    None => return Ok(SessionEnd::EndOfInput),
                };
                if filename.is_empty() {
                    prompter.say(FinanceError::EmptyField("File name"))?;
                    continue;
                }
                match service.export_summary(Path::new(&filename), &ctx.settings.summary_labels) {
                    Ok(_) => prompter.say(format!("Summary saved to file: {}", filename))?,
                    Err(e) => prompter.say(format!("Error saving file: {}", e))?,
                }
            }
            "6" => return Ok(SessionEnd::Logout),
            _ => prompter.say("Unknown option, try again.")?,
        }
    }
}

/// Ask for a category then an amount
fn read_entry<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    kind: &str,
) -> FinanceResult<EntryInput> {
    let category = match prompter.prompt(&format!("Enter {} category: ", kind))? {
        Some(category) => category,
        None => return Ok(EntryInput::EndOfInput),
    };
    if category.trim().is_empty() {
        return Ok(EntryInput::Rejected(FinanceError::EmptyField("Category")));
    }

    let raw_amount = match prompter.prompt(&format!("Enter {} amount: ", kind))? {
        Some(amount) => amount,
        None => return Ok(EntryInput::EndOfInput),
    };

    Ok(match Money::parse(&raw_amount) {
        Ok(amount) => EntryInput::Ready { category, amount },
        Err(e) => EntryInput::Rejected(e),
    })
}
