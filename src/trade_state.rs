use std::fmt::{self, Display};

/// Price seed of a trade state.
///
/// The ledger overloads the raw price: `u64::MAX` marks an open seller trade
/// state and `0` marks a settled (free) one. Any other value is a concrete bid
/// or ask. The raw value only appears when seeds or instruction data are
/// encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TradePrice {
    Open,
    Settled,
    Bid(u64),
}

impl TradePrice {
    pub fn from_raw(raw: u64) -> Self {
        match raw {
            u64::MAX => TradePrice::Open,
            0 => TradePrice::Settled,
            price => TradePrice::Bid(price),
        }
    }

    pub fn raw(self) -> u64 {
        match self {
            TradePrice::Open => u64::MAX,
            TradePrice::Settled => 0,
            TradePrice::Bid(price) => price,
        }
    }

    pub fn to_seed(self) -> [u8; 8] {
        self.raw().to_le_bytes()
    }
}

impl Display for TradePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradePrice::Open => write!(f, "open"),
            TradePrice::Settled => write!(f, "settled"),
            TradePrice::Bid(price) => write!(f, "{}", price),
        }
    }
}
