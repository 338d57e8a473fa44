use serde::Serialize;

use crate::game::GameError;

/// A tradeable token with a fixed simulated USD price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub mint: &'static str,
    pub price: f64,
    pub icon: &'static str,
}

pub const CATALOG: [Token; 4] = [
    Token {
        symbol: "SOL",
        name: "Solana",
        mint: "So11111111111111111111111111111111111111112",
        price: 98.45,
        icon: "◎",
    },
    Token {
        symbol: "USDC",
        name: "USD Coin",
        mint: "6LX8E5Ksde8vYF2y1TdHNhXd2K5Nv8Zt6nUCHQhEf7cN",
        price: 1.00,
        icon: "💲",
    },
    Token {
        symbol: "JUP",
        name: "Jupiter",
        mint: "27G8MtK7VtTcCHkpASjSDdkWWYfoqT6ggEuKidVJidD4",
        price: 0.87,
        icon: "🪐",
    },
    Token {
        symbol: "RAY",
        name: "Raydium",
        mint: "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R",
        price: 2.34,
        icon: "🌊",
    },
];

/// Case-insensitive catalog lookup.
pub fn find(symbol: &str) -> Result<Token, GameError> {
    CATALOG
        .iter()
        .copied()
        .find(|t| t.symbol.eq_ignore_ascii_case(symbol.trim()))
        .ok_or_else(|| GameError::UnknownToken(symbol.trim().to_string()))
}

pub fn format_price_list() -> String {
    let mut out = String::from("Prices:\n");
    for t in CATALOG.iter() {
        out.push_str(&format!("{} {:<5} ${:.2}\n", t.icon, t.symbol, t.price));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("sol").unwrap().symbol, "SOL");
        assert_eq!(find(" Jup ").unwrap().price, 0.87);
        assert_eq!(find("DOGE"), Err(GameError::UnknownToken("DOGE".into())));
    }
}
