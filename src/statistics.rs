//! Descriptive statistics over numeric sequences.
//!
//! Values are converted to `f64` through `num_traits::ToPrimitive`; a value
//! that has no `f64` representation is reported as an invalid argument.
//! Sample statistics (`variance`, `stdev`) need two data points, everything
//! else needs one.

use std::collections::HashMap;
use std::hash::Hash;

use num_traits::ToPrimitive;

use crate::error::{ChainError, ChainResult};

fn to_floats<I>(data: I) -> ChainResult<Vec<f64>>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    data.into_iter()
        .map(|value| {
            value
                .to_f64()
                .ok_or_else(|| ChainError::invalid("value has no f64 representation"))
        })
        .collect()
}

fn non_empty(values: Vec<f64>) -> ChainResult<Vec<f64>> {
    if values.is_empty() {
        Err(ChainError::EmptySequence)
    } else {
        Ok(values)
    }
}

/// Arithmetic mean.
pub fn mean<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let values = non_empty(to_floats(data)?)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Arithmetic mean computed in a single pass without materializing the data.
pub fn fmean<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let mut count = 0usize;
    let mut total = 0.0;
    for value in data {
        total += value
            .to_f64()
            .ok_or_else(|| ChainError::invalid("value has no f64 representation"))?;
        count += 1;
    }
    if count == 0 {
        return Err(ChainError::EmptySequence);
    }
    Ok(total / count as f64)
}

fn sorted_floats<I>(data: I) -> ChainResult<Vec<f64>>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let mut values = non_empty(to_floats(data)?)?;
    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Middle value; the mean of the two middle values for even-length data.
pub fn median<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let values = sorted_floats(data)?;
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Lower of the two middle values for even-length data.
pub fn median_low<I>(data: I) -> ChainResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut values: Vec<_> = data.into_iter().collect();
    if values.is_empty() {
        return Err(ChainError::EmptySequence);
    }
    values.sort();
    let index = (values.len() - 1) / 2;
    Ok(values.swap_remove(index))
}

/// Higher of the two middle values for even-length data.
pub fn median_high<I>(data: I) -> ChainResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut values: Vec<_> = data.into_iter().collect();
    if values.is_empty() {
        return Err(ChainError::EmptySequence);
    }
    values.sort();
    let index = values.len() / 2;
    Ok(values.swap_remove(index))
}

/// Most common value; ties go to the value seen first.
pub fn mode<I>(data: I) -> ChainResult<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut counts: HashMap<I::Item, (usize, usize)> = HashMap::new();
    for (position, value) in data.into_iter().enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
        .ok_or(ChainError::EmptySequence)
}

fn sum_of_squares(values: &[f64]) -> f64 {
    let centre = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - centre).powi(2)).sum()
}

/// Population variance.
pub fn pvariance<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let values = non_empty(to_floats(data)?)?;
    Ok(sum_of_squares(&values) / values.len() as f64)
}

/// Sample variance.
pub fn variance<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let values = to_floats(data)?;
    if values.len() < 2 {
        return Err(ChainError::invalid("variance requires at least two data points"));
    }
    Ok(sum_of_squares(&values) / (values.len() - 1) as f64)
}

pub fn pstdev<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    pvariance(data).map(f64::sqrt)
}

pub fn stdev<I>(data: I) -> ChainResult<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    variance(data).map(f64::sqrt)
}
