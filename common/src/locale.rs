use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Supported console languages. Threaded explicitly through the display
/// layer — never ambient process state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::French => write!(f, "fr"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" | "francais" | "français" => Ok(Language::French),
            other => Err(format!("unknown language '{other}' (expected en or fr)")),
        }
    }
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::French]
    }

    /// Interactive language-menu choice: `1` = English, `2` = French.
    pub fn from_menu_choice(choice: &str) -> Option<Language> {
        match choice {
            "1" => Some(Language::English),
            "2" => Some(Language::French),
            _ => None,
        }
    }

    /// Canadian-style money formatting: `$8.00` in English, `8,00 $` in French.
    pub fn format_money(&self, amount: Money) -> String {
        let (dollars, cents) = amount.split();
        match self {
            Language::English => format!("${dollars}.{cents:02}"),
            Language::French => format!("{dollars},{cents:02} $"),
        }
    }

    // ─── Message catalog ─────────────────────────────────────────────────
    // One method per user-facing string, both translations side by side.

    pub fn prompt_username(&self) -> &'static str {
        match self {
            Language::English => "Enter your name (leave blank to quit):",
            Language::French => "Entrez votre nom (laissez vide pour quitter) :",
        }
    }

    pub fn prompt_password(&self) -> &'static str {
        match self {
            Language::English => "Enter your password:",
            Language::French => "Entrez votre mot de passe :",
        }
    }

    pub fn prompt_enter_number(&self) -> &'static str {
        match self {
            Language::English => "Enter a number:",
            Language::French => "Entrez un nombre :",
        }
    }

    pub fn prompt_purchase_amount(&self) -> &'static str {
        match self {
            Language::English => "How many would you like to buy?",
            Language::French => "Combien voulez-vous en acheter ?",
        }
    }

    pub fn prompt_what_to_buy(&self) -> &'static str {
        match self {
            Language::English => "What would you like to buy?",
            Language::French => "Que voulez-vous acheter ?",
        }
    }

    pub fn msg_invalid_user(&self) -> &'static str {
        match self {
            Language::English => "Unknown user name.",
            Language::French => "Nom d'utilisateur inconnu.",
        }
    }

    pub fn msg_incorrect_password(&self) -> &'static str {
        match self {
            Language::English => "Incorrect password.",
            Language::French => "Mot de passe incorrect.",
        }
    }

    pub fn msg_invalid_selection(&self) -> &'static str {
        match self {
            Language::English => "That is not a valid selection.",
            Language::French => "Ce choix n'est pas valide.",
        }
    }

    pub fn msg_invalid_quantity(&self) -> &'static str {
        match self {
            Language::English => "You cannot buy less than one item.",
            Language::French => "Vous ne pouvez pas acheter moins d'un article.",
        }
    }

    pub fn msg_insufficient_funds(&self) -> &'static str {
        match self {
            Language::English => "You do not have enough money to buy that.",
            Language::French => "Vous n'avez pas assez d'argent pour acheter cela.",
        }
    }

    pub fn msg_exit(&self) -> &'static str {
        match self {
            Language::English => "Goodbye! Press Enter to close.",
            Language::French => "Au revoir ! Appuyez sur Entrée pour fermer.",
        }
    }

    pub fn msg_login_successful(&self, name: &str) -> String {
        match self {
            Language::English => format!("Welcome back, {name}!"),
            Language::French => format!("Bon retour, {name} !"),
        }
    }

    pub fn msg_balance(&self, balance: Money) -> String {
        let amount = self.format_money(balance);
        match self {
            Language::English => format!("Your balance is {amount}."),
            Language::French => format!("Votre solde est de {amount}."),
        }
    }

    pub fn msg_new_balance(&self, balance: Money) -> String {
        let amount = self.format_money(balance);
        match self {
            Language::English => format!("Your new balance is {amount}."),
            Language::French => format!("Votre nouveau solde est de {amount}."),
        }
    }

    pub fn msg_want_to_buy(&self, product: &str) -> String {
        match self {
            Language::English => format!("You want to buy: {product}"),
            Language::French => format!("Vous voulez acheter : {product}"),
        }
    }

    pub fn msg_menu_exit(&self, exit_index: usize) -> String {
        match self {
            Language::English => format!("Type {exit_index} to exit."),
            Language::French => format!("Tapez {exit_index} pour quitter."),
        }
    }

    pub fn msg_out_of_stock(&self, product: &str) -> String {
        match self {
            Language::English => format!("Sorry, {product} is out of stock."),
            Language::French => format!("Désolé, il n'y a plus de {product} en stock."),
        }
    }

    pub fn msg_insufficient_stock(&self, available: u32, product: &str) -> String {
        match self {
            Language::English => format!("Sorry, there are only {available} of {product} left."),
            Language::French => format!("Désolé, il ne reste que {available} {product}."),
        }
    }

    pub fn msg_purchased(&self, quantity: u32, product: &str) -> String {
        match self {
            Language::English => format!("You bought {quantity} {product}."),
            Language::French => format!("Vous avez acheté {quantity} {product}."),
        }
    }
}
