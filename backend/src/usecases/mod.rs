pub mod crud;

#[cfg(test)]
pub(crate) mod test_support;
