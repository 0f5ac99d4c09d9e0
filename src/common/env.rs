use anyhow::Context;
use std::env;
use std::error::Error;
use std::str::FromStr;

pub trait FromEnv: Sized {
    fn from_env(env_var: &str) -> anyhow::Result<Self>;

    /// Like [`FromEnv::from_env`], but falls back to `default` when the variable is unset.
    fn from_env_or(env_var: &str, default: Self) -> anyhow::Result<Self>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env(env_var: &str) -> anyhow::Result<Self> {
        let value = env::var(env_var).with_context(|| format!("{env_var} is not set"))?;
        T::from_str(&value).with_context(|| format!("{env_var} has an invalid value"))
    }

    fn from_env_or(env_var: &str, default: Self) -> anyhow::Result<Self> {
        match env::var(env_var) {
            Ok(value) => {
                T::from_str(&value).with_context(|| format!("{env_var} has an invalid value"))
            }
            Err(env::VarError::NotPresent) => Ok(default),
            Err(e) => Err(e).with_context(|| format!("{env_var} is not valid unicode")),
        }
    }
}
