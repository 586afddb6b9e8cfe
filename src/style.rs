/// ANSI SGR styles understood by [`paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
  // foreground colors
  Black,
  Red,
  Green,
  Yellow,
  Blue,
  Magenta,
  Cyan,
  White,
  // background colors
  BlackBg,
  RedBg,
  GreenBg,
  YellowBg,
  BlueBg,
  MagentaBg,
  CyanBg,
  WhiteBg,
  // text styles
  Reset,
  Bold,
  Underline,
  Inverse,
  BoldOff,
  UnderlineOff,
  InverseOff,
}

impl Style {
  pub fn code(self) -> u8 {
    match self {
      Style::Black => 30,
      Style::Red => 31,
      Style::Green => 32,
      Style::Yellow => 33,
      Style::Blue => 34,
      Style::Magenta => 35,
      Style::Cyan => 36,
      Style::White => 37,
      Style::BlackBg => 40,
      Style::RedBg => 41,
      Style::GreenBg => 42,
      Style::YellowBg => 43,
      Style::BlueBg => 44,
      Style::MagentaBg => 45,
      Style::CyanBg => 46,
      Style::WhiteBg => 47,
      Style::Reset => 0,
      Style::Bold => 1,
      Style::Underline => 4,
      Style::Inverse => 7,
      Style::BoldOff => 21,
      Style::UnderlineOff => 24,
      Style::InverseOff => 27,
    }
  }
}

/// Wraps `text` in the escape sequence for `style`, then resets.
///
/// No nesting support: styles are wrap-and-reset only.
pub fn paint(text: &str, style: Style) -> String {
  format!("\x1b[1;{}m{}\x1b[0m", style.code(), text)
}
