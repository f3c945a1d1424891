//! Level-wise (Apriori) frequent itemset mining over an inverted
//! item → transaction index.
//!
//! ```
//! use apriori::mining::{resolve_minsup, run, TransactionIndex};
//!
//! let index = TransactionIndex::from_transactions(vec![
//!     vec![1, 2, 3],
//!     vec![1, 2],
//!     vec![1, 3],
//!     vec![2, 3],
//! ]);
//! let minsup_count = resolve_minsup(&index, 0.5).unwrap();
//! let result = run(&index, minsup_count);
//!
//! assert_eq!(result.levels.len(), 2);
//! assert_eq!(result.support_of(&[1, 3]), Some(2));
//! ```

pub mod config;
pub mod error;
pub mod mining;
pub mod reader;
pub mod report;

pub use config::MinerConfig;
pub use error::{AprioriError, Result};
pub use mining::{
    build_index, resolve_minsup, run, Apriori, FrequentLevel, ItemId, Itemset, MiningResult,
    TransactionIndex,
};

#[cfg(feature = "python")]
mod python {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use numpy::ndarray::{Array2, ArrayView2};
    use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
    use once_cell::sync::Lazy;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    use crate::config::validate_minsup;
    use crate::mining::{
        resolve_minsup, run, FrequentLevel, ItemId, TransactionIndex, TransactionIndexBuilder,
    };

    // Staged builders, keyed by the id handed back to Python
    static BUILDERS: Lazy<Mutex<HashMap<usize, TransactionIndexBuilder>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));
    static NEXT_PID: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

    type LevelArrays<'py> = (Bound<'py, PyArray2<usize>>, Bound<'py, PyArray1<usize>>);

    fn lock_error<E: std::fmt::Display>(e: E) -> PyErr {
        PyRuntimeError::new_err(format!("Lock error: {}", e))
    }

    /// Column `j` of a 0/1 matrix is item `j + 1`.
    fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<ItemId>> {
        let num_items = transactions.shape()[1];

        transactions
            .outer_iter()
            .map(|row| {
                (0..num_items)
                    .filter(|&j| row[j] != 0)
                    .map(|j| j as ItemId + 1)
                    .collect()
            })
            .collect()
    }

    fn mine_to_arrays<'py>(
        py: Python<'py>,
        index: &TransactionIndex,
        min_support: f64,
    ) -> PyResult<Vec<LevelArrays<'py>>> {
        let min_support =
            validate_minsup(min_support).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let Some(minsup_count) = resolve_minsup(index, min_support) else {
            return Ok(Vec::new());
        };

        run(index, minsup_count)
            .levels
            .iter()
            .map(|level| level_to_arrays(py, level))
            .collect()
    }

    fn level_to_arrays<'py>(py: Python<'py>, level: &FrequentLevel) -> PyResult<LevelArrays<'py>> {
        let itemset_size = level.itemset_size;
        let num_itemsets = level.len();
        let mut data = Vec::with_capacity(num_itemsets * itemset_size);
        let mut supports = Vec::with_capacity(num_itemsets);

        for (itemset, support) in level.iter() {
            data.extend(itemset.iter().map(|&item| item as usize));
            supports.push(support);
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;

        Ok((array.into_pyarray(py), supports.into_pyarray(py)))
    }

    #[pyfunction]
    #[pyo3(name = "apriori")]
    fn apriori_py<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
    ) -> PyResult<Vec<LevelArrays<'py>>> {
        let rows = matrix_to_transactions(transactions.as_array());
        let index = TransactionIndex::from_transactions(rows);
        mine_to_arrays(py, &index, min_support)
    }

    #[pyfunction]
    fn create_apriori() -> PyResult<usize> {
        let mut pid_lock = NEXT_PID.lock().map_err(lock_error)?;
        let pid = *pid_lock;
        *pid_lock += 1;
        drop(pid_lock);

        BUILDERS
            .lock()
            .map_err(lock_error)?
            .insert(pid, TransactionIndexBuilder::new());
        Ok(pid)
    }

    #[pyfunction]
    fn apriori_add_transactions(
        pid: usize,
        transactions: PyReadonlyArray2<i32>,
    ) -> PyResult<usize> {
        let mut builders = BUILDERS.lock().map_err(lock_error)?;
        let builder = builders
            .get_mut(&pid)
            .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;

        for transaction in matrix_to_transactions(transactions.as_array()) {
            builder.push_transaction(transaction);
        }
        Ok(builder.len())
    }

    /// Finishes the staged index and mines it; the id is released.
    #[pyfunction]
    fn apriori_mine<'py>(
        py: Python<'py>,
        pid: usize,
        min_support: f64,
    ) -> PyResult<Vec<LevelArrays<'py>>> {
        let builder = BUILDERS
            .lock()
            .map_err(lock_error)?
            .remove(&pid)
            .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;

        mine_to_arrays(py, &builder.finish(), min_support)
    }

    #[pyfunction]
    fn apriori_cleanup(pid: usize) -> PyResult<()> {
        BUILDERS
            .lock()
            .map_err(lock_error)?
            .remove(&pid)
            .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
        Ok(())
    }

    #[pymodule]
    fn apriori(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
        m.add_function(wrap_pyfunction!(create_apriori, m)?)?;
        m.add_function(wrap_pyfunction!(apriori_add_transactions, m)?)?;
        m.add_function(wrap_pyfunction!(apriori_mine, m)?)?;
        m.add_function(wrap_pyfunction!(apriori_cleanup, m)?)?;
        Ok(())
    }
}
