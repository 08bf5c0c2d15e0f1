use std::io::{self, BufRead, Write};

use crate::{AccountId, Amount, Ledger, Operation};

const SEPARATOR: &str = "----------------------------";

/// The interactive text menu in front of a [`Ledger`]
///
/// The menu reads one answer per line from `input` and writes prompts and
/// results to `output`. It stops on the exit choice or at the end of input.
pub struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Self { ledger, input, output }
    }

    /// Runs the menu loop until the operator exits or the input ends
    pub fn run(mut self) -> io::Result<()> {
        match self.run_loop() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("input closed, leaving the menu");
                Ok(())
            }
            result => result,
        }
    }

    fn run_loop(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let choice = self.prompt("Enter your choice (1-6): ")?;

            match choice.as_str() {
                "1" => self.create_account()?,
                "2" => self.deposit()?,
                "3" => self.withdraw()?,
                "4" => self.transfer()?,
                "5" => self.display_all_accounts()?,
                "6" => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the bank ledger")?;
        writeln!(self.output, "1. Create a new account")?;
        writeln!(self.output, "2. Deposit funds")?;
        writeln!(self.output, "3. Withdraw funds")?;
        writeln!(self.output, "4. Transfer funds")?;
        writeln!(self.output, "5. Display all accounts")?;
        writeln!(self.output, "6. Exit")
    }

    /// Prints `message` and reads the trimmed answer
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a garbled line ends
    /// up as an invalid answer. Fails with [`io::ErrorKind::UnexpectedEof`]
    /// once the input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        Ok(String::from_utf8_lossy(&line).trim().to_owned())
    }

    fn prompt_amount(&mut self, message: &str) -> io::Result<Option<Amount>> {
        let answer = self.prompt(message)?;
        match answer.parse::<Amount>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Invalid amount.")?;
                Ok(None)
            }
        }
    }

    /// Asks for an account number and checks that the account exists
    fn prompt_account(&mut self, message: &str) -> io::Result<Option<AccountId>> {
        let id = AccountId::from(self.prompt(message)?);
        match self.ledger.find_account(&id) {
            Ok(_) => Ok(Some(id)),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(None)
            }
        }
    }

    fn submit(&mut self, operation: Operation) -> io::Result<()> {
        match self.ledger.apply(&operation) {
            Ok(outcome) => writeln!(self.output, "{}", outcome),
            Err(e) => {
                tracing::debug!(?operation, error = %e, "operation rejected");
                writeln!(self.output, "{}", e)
            }
        }
    }

    fn create_account(&mut self) -> io::Result<()> {
        let name = self.prompt("Enter account holder's name: ")?;
        let Some(initial_deposit) = self.prompt_amount("Enter initial deposit amount: ")? else {
            return Ok(());
        };

        self.submit(Operation::create(name, initial_deposit))
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(account) = self.prompt_account("Enter account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to deposit: ")? else {
            return Ok(());
        };

        self.submit(Operation::deposit(account, amount))
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(account) = self.prompt_account("Enter account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to withdraw: ")? else {
            return Ok(());
        };

        self.submit(Operation::withdraw(account, amount))
    }

    fn transfer(&mut self) -> io::Result<()> {
        let Some(sender) = self.prompt_account("Enter sender's account number: ")? else {
            return Ok(());
        };
        let Some(recipient) = self.prompt_account("Enter recipient's account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to transfer: ")? else {
            return Ok(());
        };

        self.submit(Operation::transfer(sender, recipient, amount))
    }

    fn display_all_accounts(&mut self) -> io::Result<()> {
        let Some(accounts) = self.ledger.all_accounts() else {
            return writeln!(self.output, "No accounts available.");
        };

        for details in accounts {
            writeln!(self.output, "{}", details)?;
            writeln!(self.output, "{}", SEPARATOR)?;
        }

        Ok(())
    }
}
