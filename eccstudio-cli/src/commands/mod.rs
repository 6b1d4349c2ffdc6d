//! One module per subcommand

pub mod battle;
pub mod compare;
pub mod recommend;
pub mod run;
