use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/minigames/mining")]
    Mining,
    #[at("/minigames/mining/:mine_id")]
    MinePlay { mine_id: String },
    #[at("/minigames/woodcutting")]
    Woodcutting,
    #[at("/minigames/woodcutting/:field_id")]
    FieldPlay { field_id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Where a page's back button leads.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Mining | Self::Woodcutting | Self::NotFound => Some(Self::Home),
            Self::MinePlay { .. } => Some(Self::Mining),
            Self::FieldPlay { .. } => Some(Self::Woodcutting),
        }
    }
}
