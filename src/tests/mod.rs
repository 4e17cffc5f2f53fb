pub mod util;

#[cfg(test)]
mod classify;
#[cfg(test)]
mod builder;
#[cfg(test)]
mod negative;
#[cfg(all(test, feature = "debugging"))]
mod debugging;
