use std::hash::Hash;

use num_traits::ToPrimitive;

use super::ChainedSequence;
use crate::error::ChainResult;
use crate::statistics;

impl<I> ChainedSequence<I>
where
    I: Iterator,
{
    pub fn mean(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::mean(self.iter)
    }

    /// Single-pass mean; does not hold the data in memory.
    pub fn fmean(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::fmean(self.iter)
    }

    pub fn median(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::median(self.iter)
    }

    pub fn median_low(self) -> ChainResult<I::Item>
    where
        I::Item: Ord,
    {
        statistics::median_low(self.iter)
    }

    pub fn median_high(self) -> ChainResult<I::Item>
    where
        I::Item: Ord,
    {
        statistics::median_high(self.iter)
    }

    pub fn mode(self) -> ChainResult<I::Item>
    where
        I::Item: Eq + Hash,
    {
        statistics::mode(self.iter)
    }

    pub fn pvariance(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::pvariance(self.iter)
    }

    pub fn variance(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::variance(self.iter)
    }

    pub fn pstdev(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::pstdev(self.iter)
    }

    pub fn stdev(self) -> ChainResult<f64>
    where
        I::Item: ToPrimitive,
    {
        statistics::stdev(self.iter)
    }
}
