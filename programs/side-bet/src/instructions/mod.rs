pub mod initialize;
pub mod update_config;
pub mod set_event_sides;
pub mod set_sale_window;
pub mod end_sale_now;
pub mod initialize_side_bet;
pub mod deposit;
pub mod select_winning_side;
pub mod cancel_event;
pub mod withdraw;
pub mod distribute_reward;
pub mod cancel_bet_and_refund_tokens;
pub mod views;

pub use initialize::*;
pub use update_config::*;
pub use set_event_sides::*;
pub use set_sale_window::*;
pub use end_sale_now::*;
pub use initialize_side_bet::*;
pub use deposit::*;
pub use select_winning_side::*;
pub use cancel_event::*;
pub use withdraw::*;
pub use distribute_reward::*;
pub use cancel_bet_and_refund_tokens::*;
pub use views::*;
