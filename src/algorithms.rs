pub(crate) mod dfs;
pub mod transpose;
pub mod finish_order;
pub mod scc;
pub mod condensation;
pub mod source;
pub mod reach;
pub mod viewpoint;
pub mod stress;
