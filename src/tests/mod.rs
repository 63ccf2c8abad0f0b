pub mod util;

#[cfg(test)]
mod negative;
#[cfg(test)]
mod format;
