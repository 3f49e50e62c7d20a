//! Shared UI components

pub mod button;
pub mod card_detail;
pub mod card_tile;
pub mod helpers;
pub mod icons;
pub mod modal;
pub mod pagination;
pub mod search_bar;
pub mod search_view;
pub mod text_input;

pub use button::{Button, ButtonVariant};
pub use card_detail::CardDetail;
pub use card_tile::{CardGrid, CardTile};
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{
    ChevronLeftIcon, ChevronRightIcon, ExternalLinkIcon, LoaderIcon, SearchIcon, XIcon,
};
pub use modal::Modal;
pub use pagination::PaginationBar;
pub use search_bar::SearchBar;
pub use search_view::SearchView;
pub use text_input::TextInput;
