use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CombinatoricsError {
    #[error("cannot choose {k} from fewer than {k} items (have {n})")]
    NotEnoughItems { n: usize, k: usize },

    #[error("C({n}, {k}) does not fit into u64")]
    Overflow { n: usize, k: usize },
}

/// Число сочетаний C(n, k), точно в целых.
///
/// `k > n` — ошибка, а не ноль: перебор досок с такой колодой бессмыслен.
pub fn binomial(n: usize, k: usize) -> Result<u64, CombinatoricsError> {
    if k > n {
        return Err(CombinatoricsError::NotEnoughItems { n, k });
    }
    let k_small = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k_small {
        // acc * (n - i) / (i + 1) всегда делится нацело.
        acc = acc
            .checked_mul((n - i) as u64)
            .ok_or(CombinatoricsError::Overflow { n, k })?
            / (i as u64 + 1);
    }
    Ok(acc)
}
