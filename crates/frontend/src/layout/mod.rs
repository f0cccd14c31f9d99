pub mod navbar;

/// The four record screens reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Expenses,
    FeedPurchases,
    EggProduction,
    EggSales,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Expenses,
        Screen::FeedPurchases,
        Screen::EggProduction,
        Screen::EggSales,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Expenses => "Expenses",
            Screen::FeedPurchases => "Feed",
            Screen::EggProduction => "Egg Production",
            Screen::EggSales => "Egg Sales",
        }
    }
}
