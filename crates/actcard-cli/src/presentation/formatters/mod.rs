pub mod money;
pub mod phone;
pub mod text;
pub mod time;

pub use money::format_money;
pub use phone::format_phone_number;
pub use text::{strip_markup, truncate};
pub use time::format_date_time;
