use std::io::{self, BufRead, Write};

use thiserror::Error;

use tuckshop_common::catalog::Catalog;
use tuckshop_common::locale::Language;
use tuckshop_common::purchase::{self, PurchaseError};
use tuckshop_common::store::{DataStore, StoreError};

use crate::prompt::{read_line, read_number};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Login cancelled with a blank name; nothing was persisted.
    LoginCancelled,
    /// Exit chosen from the menu after the catalog was persisted.
    Exited,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One interactive run: language select, login, then the purchase menu
/// until the exit entry is chosen.
///
/// Business-rule refusals (bad quantity, stock, funds, unknown user) are
/// ordinary loop outcomes reported as localized messages; only console or
/// store I/O failures surface as errors.
pub struct Session<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    catalog: &'a mut Catalog,
    store: &'a DataStore,
    language: Language,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: &'a mut R,
        output: &'a mut W,
        catalog: &'a mut Catalog,
        store: &'a DataStore,
    ) -> Self {
        Session {
            input,
            output,
            catalog,
            store,
            language: Language::default(),
        }
    }

    /// Drive the whole session. `preselected` skips the language menu.
    pub fn run(&mut self, preselected: Option<Language>) -> Result<SessionEnd, SessionError> {
        writeln!(self.output, "Welcome to the tuckshop")?;
        writeln!(self.output, "-----------------------")?;

        self.language = match preselected {
            Some(language) => language,
            None => self.select_language()?,
        };

        let user_index = match self.login()? {
            Some(index) => index,
            None => {
                // Blank name cancels: straight to the exit message, no save.
                tracing::info!("login cancelled");
                self.print_exit()?;
                return Ok(SessionEnd::LoginCancelled);
            }
        };

        let user = &self.catalog.users[user_index];
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.language.msg_login_successful(&user.name))?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.language.msg_balance(user.balance))?;

        self.shop(user_index)?;
        self.print_exit()?;
        Ok(SessionEnd::Exited)
    }

    /// Bilingual language menu; anything but `1` or `2` re-prompts.
    fn select_language(&mut self) -> io::Result<Language> {
        loop {
            writeln!(self.output, "For service in English enter 1")?;
            writeln!(self.output, "Pour le service en français tapez le 2")?;
            self.output.flush()?;
            let line = read_line(self.input)?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed at the language menu",
                )
            })?;
            if let Some(language) = Language::from_menu_choice(line.trim()) {
                tracing::debug!(%language, "language selected");
                return Ok(language);
            }
        }
    }

    /// Login loop per the authentication contract: blank name cancels,
    /// unknown name or wrong password reports and restarts from the name
    /// prompt. Returns the matched user's index.
    fn login(&mut self) -> io::Result<Option<usize>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.language.prompt_username())?;
            self.output.flush()?;
            let name = match read_line(self.input)? {
                Some(line) => line,
                None => return Ok(None),
            };
            if name.trim().is_empty() {
                return Ok(None);
            }

            match self.catalog.find_user(&name) {
                Some(index) => {
                    writeln!(self.output, "{}", self.language.prompt_password())?;
                    self.output.flush()?;
                    let password = read_line(self.input)?.unwrap_or_default();
                    if self.catalog.users[index].password_matches(&password) {
                        tracing::info!(user = %name, "login successful");
                        return Ok(Some(index));
                    }
                    tracing::warn!(user = %name, "incorrect password");
                    writeln!(self.output, "{}", self.language.msg_incorrect_password())?;
                }
                None => {
                    tracing::warn!(user = %name, "unknown user");
                    writeln!(self.output, "{}", self.language.msg_invalid_user())?;
                }
            }
        }
    }

    /// The purchase menu loop. Exits only via the trailing exit entry,
    /// which persists the catalog first.
    fn shop(&mut self, user_index: usize) -> Result<(), SessionError> {
        loop {
            self.print_menu()?;
            let selection =
                read_number(self.input, self.output, self.language.prompt_enter_number())?;

            if selection == self.catalog.exit_index() as i64 {
                self.store.save(self.catalog)?;
                return Ok(());
            }

            let Some(product_index) = self.catalog.resolve_selection(selection) else {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.language.msg_invalid_selection())?;
                continue;
            };

            let product = &self.catalog.products[product_index];
            let balance = self.catalog.users[user_index].balance;
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.language.msg_want_to_buy(&product.name))?;
            writeln!(self.output, "{}", self.language.msg_balance(balance))?;
            writeln!(self.output)?;

            let quantity = read_number(
                self.input,
                self.output,
                self.language.prompt_purchase_amount(),
            )?;

            let outcome = {
                let Catalog { users, products } = &mut *self.catalog;
                purchase::commit(&mut users[user_index], &mut products[product_index], quantity)
            };
            match outcome {
                Ok(new_balance) => {
                    let name = &self.catalog.products[product_index].name;
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "{}",
                        self.language.msg_purchased(quantity as u32, name)
                    )?;
                    writeln!(self.output, "{}", self.language.msg_new_balance(new_balance))?;
                }
                Err(refusal) => {
                    tracing::debug!(%refusal, "purchase refused");
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", self.describe_refusal(&refusal))?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.language.prompt_what_to_buy())?;
        for (i, product) in self.catalog.products.iter().enumerate() {
            writeln!(
                self.output,
                "{}: {} ({})",
                i + 1,
                product.name,
                self.language.format_money(product.price)
            )?;
        }
        writeln!(
            self.output,
            "{}",
            self.language.msg_menu_exit(self.catalog.exit_index())
        )?;
        Ok(())
    }

    fn describe_refusal(&self, refusal: &PurchaseError) -> String {
        match refusal {
            PurchaseError::InvalidQuantity => self.language.msg_invalid_quantity().to_string(),
            PurchaseError::OutOfStock { product } => self.language.msg_out_of_stock(product),
            PurchaseError::InsufficientStock { product, available } => {
                self.language.msg_insufficient_stock(*available, product)
            }
            PurchaseError::InsufficientFunds { .. } => {
                self.language.msg_insufficient_funds().to_string()
            }
        }
    }

    /// Exit message, then hold the console open for one more line.
    fn print_exit(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.language.msg_exit())?;
        self.output.flush()?;
        let _ = read_line(self.input)?;
        Ok(())
    }
}
