/// Trailing simple moving average.
///
/// Output length always equals input length. Index `i < period - 1` is `None`
/// (insufficient history); index `i >= period - 1` is the arithmetic mean of
/// the `period` values ending at `i`. A period longer than the series yields
/// an all-`None` sequence, as does a period of zero.
#[inline]
pub fn moving_average(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; prices.len()];
    }

    let mut out = Vec::with_capacity(prices.len());
    let mut window_sum = 0.0;

    for (i, &price) in prices.iter().enumerate() {
        window_sum += price;
        if i >= period {
            window_sum -= prices[i - period];
        }
        if i + 1 >= period {
            out.push(Some(window_sum / period as f64));
        } else {
            out.push(None);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_matches_input_length() {
        let prices: Vec<f64> = (0..100).map(|i| i as f64).collect();
        for period in [1, 5, 20, 50, 99, 100, 101] {
            assert_eq!(moving_average(&prices, period).len(), prices.len());
        }
    }

    #[test]
    fn leading_entries_are_undefined() {
        let prices = [10.0, 20.0, 15.0];
        assert_eq!(
            moving_average(&prices, 3),
            vec![None, None, Some(15.0)] // mean of all three
        );
    }

    #[test]
    fn trailing_mean_matches_naive_computation() {
        let prices = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
        let period = 3;
        let ma = moving_average(&prices, period);
        for i in (period - 1)..prices.len() {
            let naive: f64 =
                prices[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
            let got = ma[i].unwrap();
            assert!((got - naive).abs() < 1e-9, "index {i}: {got} vs {naive}");
        }
    }

    #[test]
    fn period_one_is_identity() {
        let prices = [3.5, 7.25, -1.0];
        assert_eq!(
            moving_average(&prices, 1),
            vec![Some(3.5), Some(7.25), Some(-1.0)]
        );
    }

    #[test]
    fn oversized_period_yields_all_none() {
        let prices = [1.0, 2.0];
        assert!(moving_average(&prices, 50).iter().all(Option::is_none));
        assert!(moving_average(&prices, 0).iter().all(Option::is_none));
        assert!(moving_average(&[], 5).is_empty());
    }
}
