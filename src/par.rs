//! Parallel variants of the reference sorting baselines built on [`rayon::join`].

pub mod merge_sort;
pub mod quick_sort;
