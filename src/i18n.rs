#[macro_export]
macro_rules! tr {
  ($k:ident, $v:expr) => {
    pub const $k: &str = $v;
  };
}

#[cfg(not(feature = "i18n-ru"))]
mod en;
#[cfg(not(feature = "i18n-ru"))]
use en as translations;

#[cfg(feature = "i18n-ru")]
mod ru;
#[cfg(feature = "i18n-ru")]
use ru as translations;

pub use translations::*;
