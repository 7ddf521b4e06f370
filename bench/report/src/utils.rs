use serde::Serializer;

pub(crate) fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_to_thousandths(*value))
}

pub(crate) fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn min(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().reduce(f64::min)
}

pub(crate) fn max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_to_three_decimals() {
        assert_eq!(round_to_thousandths(1.23456), 1.235);
        assert_eq!(round_to_thousandths(-0.0004), -0.0);
    }

    #[test]
    fn min_and_max_should_be_none_for_empty_input() {
        assert_eq!(min(Vec::<f64>::new()), None);
        assert_eq!(max(Vec::<f64>::new()), None);
        assert_eq!(min([3.0, 1.0, 2.0]), Some(1.0));
        assert_eq!(max([3.0, 1.0, 2.0]), Some(3.0));
    }
}
