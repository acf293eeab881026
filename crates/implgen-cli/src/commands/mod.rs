pub mod interfaces;
pub mod module_loader;
pub mod stub;

#[cfg(test)]
mod interfaces_tests;
#[cfg(test)]
mod stub_tests;
