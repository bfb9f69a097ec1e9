//! Top-level menu
//!
//! Registration, login and exit. The registry is borrowed for the whole run
//! and stays with the caller, which persists it afterwards.

use std::io::{BufRead, Write};

use crate::error::FinanceResult;
use crate::models::AccountRegistry;
use crate::services::AccountService;

use super::prompt::Prompter;
use super::session::{run_session, SessionEnd};
use super::MenuContext;

const MAIN_MENU: &str = "\n1. Register\n2. Log in\n3. Exit";

/// Run the top-level menu until the user exits or input ends
pub fn run_main_menu<R: BufRead, W: Write>(
    registry: &mut AccountRegistry,
    ctx: &MenuContext<'_>,
    prompter: &mut Prompter<R, W>,
) -> FinanceResult<()> {
    loop {
        prompter.say(MAIN_MENU)?;
        let choice = match prompter.prompt("Choose an option: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        match choice.trim() {
            "1" => {
                let Some((username, password)) = read_credentials(prompter)? else {
                    return Ok(());
                };
                match AccountService::new(registry, ctx.audit).register(&username, &password) {
                    Ok(()) => prompter.say("User registered successfully.")?,
                    Err(e) => prompter.say(e)?,
                }
            }
            "2" => {
                let Some((username, password)) = read_credentials(prompter)? else {
                    return Ok(());
                };
                match AccountService::new(registry, ctx.audit).login(&username, &password) {
                    Ok(account) => {
                        prompter.say(format!("Welcome, {}!", username))?;
                        if run_session(account, ctx, prompter)? == SessionEnd::EndOfInput {
                            return Ok(());
                        }
                    }
                    Err(e) => prompter.say(e)?,
                }
            }
            "3" => return Ok(()),
            _ => prompter.say("Unknown option, try again.")?,
        }
    }
}

fn read_credentials<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> FinanceResult<Option<(String, String)>> {
    let Some(username) = prompter.prompt("Enter username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompter.prompt("Enter password: ")? else {
        return Ok(None);
    };
    Ok(Some((username, password)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::Settings;
    use crate::models::Money;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(registry: &mut AccountRegistry, script: &str, audit: Option<&AuditLogger>) -> String {
        let settings = Settings::default();
        let ctx = MenuContext {
            settings: &settings,
            audit,
        };
        let mut prompter = Prompter::new(Cursor::new(script.to_string()), Vec::new());
        run_main_menu(registry, &ctx, &mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_register_login_and_record() {
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\nsecret\n2\nalice\nsecret\n1\nsalary\n1000\n6\n3\n";

        let output = run(&mut registry, script, None);

        assert!(output.contains("User registered successfully."));
        assert!(output.contains("Welcome, alice!"));
        let alice = registry.get("alice").unwrap();
        assert_eq!(alice.ledger.balance(), Money::from_cents(100_000));
    }

    #[test]
    fn test_registration_errors_reported() {
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\nsecret\n1\nalice\nother\n1\n\npw\n1\nbob\n \n3\n";

        let output = run(&mut registry, script, None);

        assert!(output.contains("User already exists: alice"));
        assert!(output.contains("Username cannot be empty"));
        assert!(output.contains("Password cannot be empty"));
        assert_eq!(registry.usernames(), vec!["alice"]);
    }

    #[test]
    fn test_bad_login_reprompts() {
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\nsecret\n2\nalice\nwrong\n2\nbob\nsecret\n3\n";

        let output = run(&mut registry, script, None);

        assert_eq!(output.matches("Invalid username or password").count(), 2);
        assert!(!output.contains("Welcome"));
    }

    #[test]
    fn test_logout_returns_to_main_menu() {
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\na\n1\nbob\nb\n\
                      2\nalice\na\n1\nsalary\n10\n6\n\
                      2\nbob\nb\n2\nfood\n5\n6\n3\n";

        run(&mut registry, script, None);

        assert_eq!(
            registry.get("alice").unwrap().ledger.balance(),
            Money::from_cents(1_000)
        );
        assert_eq!(
            registry.get("bob").unwrap().ledger.balance(),
            Money::from_cents(-500)
        );
    }

    #[test]
    fn test_end_of_input_inside_session_exits() {
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\nsecret\n2\nalice\nsecret\n1\nsalary\n25\n";

        let output = run(&mut registry, script, None);

        assert!(output.ends_with("Income added.\n\n1. Add income\n2. Add expense\n3. Set budget\n4. View summary\n5. Export summary to file\n6. Log out\nChoose an option: "));
        assert_eq!(
            registry.get("alice").unwrap().ledger.total_income().unwrap(),
            Money::from_cents(2_500)
        );
    }

    #[test]
    fn test_session_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut registry = AccountRegistry::new();
        let script = "1\nalice\nsecret\n2\nalice\nsecret\n3\nfood\n100\n2\nfood\n20\n6\n3\n";

        run(&mut registry, script, Some(&logger));

        assert_eq!(logger.entry_count().unwrap(), 3);
    }
}
