mod letter;

pub use letter::{letter_card_style, open_button_style};
