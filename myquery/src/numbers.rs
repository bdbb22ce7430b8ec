use std::io::Write;

use clap::{Args, Parser};
use myquery_logic::{query, Sequence};
use ordered_float::OrderedFloat;

/// Numbers given on the command line.
#[derive(Debug, Args)]
pub(crate) struct Values {
    /// the numbers to work on
    #[arg(allow_negative_numbers = true)]
    pub(crate) values: Vec<f64>,
}

impl Values {
    fn sequence(&self) -> Sequence<f64> {
        self.values.iter().copied().collect()
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Filter {
    /// Keep odd numbers instead of even ones
    #[arg(long)]
    pub(crate) odd: bool,
    #[command(flatten)]
    pub(crate) values: Values,
}

impl Filter {
    pub(crate) fn run(&self, out: &mut impl Write) -> Result<(), anyhow::Error> {
        let remainder = if self.odd { 1.0 } else { 0.0 };
        tracing::debug!(count = self.values.values.len(), odd = self.odd, "filtering");
        let kept = query::filter(
            Some(&self.values.values),
            Some(|value: &f64| value.rem_euclid(2.0) == remainder),
        )?;
        write_values(out, &kept)
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Stats {
    #[command(flatten)]
    pub(crate) values: Values,
}

impl Stats {
    pub(crate) fn run(&self, out: &mut impl Write) -> Result<(), anyhow::Error> {
        let sequence = self.values.sequence();
        tracing::debug!(count = sequence.len(), "computing aggregates");
        writeln!(out, "count: {}", sequence.count())?;
        writeln!(out, "sum: {}", sequence.sum(|value| *value))?;
        writeln!(out, "min: {}", display_option(sequence.min(|value| *value)))?;
        writeln!(out, "max: {}", display_option(sequence.max(|value| *value)))?;
        writeln!(
            out,
            "average: {}",
            display_option(sequence.average(|value| *value))
        )?;
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Sort {
    #[command(flatten)]
    pub(crate) values: Values,
}

impl Sort {
    pub(crate) fn run(&self, out: &mut impl Write) -> Result<(), anyhow::Error> {
        let sorted = query::sort_by(
            Some(&self.values.values),
            Some(|value: &f64| OrderedFloat(*value)),
        )?;
        write_values(out, &sorted)
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Distinct {
    #[command(flatten)]
    pub(crate) values: Values,
}

impl Distinct {
    pub(crate) fn run(&self, out: &mut impl Write) -> Result<(), anyhow::Error> {
        // f64 has no Eq or Hash, OrderedFloat does
        let keyed = query::map(
            Some(&self.values.values),
            Some(|value: &f64| OrderedFloat(*value)),
        )?;
        let distinct = query::distinct(Some(&keyed))?.map(|value| value.into_inner());
        write_values(out, &distinct)
    }
}

fn write_values(out: &mut impl Write, values: &Sequence<f64>) -> Result<(), anyhow::Error> {
    let line = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{line}")?;
    Ok(())
}

fn display_option(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(values: &[f64]) -> Values {
        Values {
            values: values.to_vec(),
        }
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), anyhow::Error>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_filter_even() {
        let filter = Filter {
            odd: false,
            values: values(&[-3.0, -2.0, 0.0, 1.5, 4.0, 7.0]),
        };
        insta::assert_snapshot!(output(|out| filter.run(out)), @"-2 0 4");
    }

    #[test]
    fn test_filter_odd() {
        let filter = Filter {
            odd: true,
            values: values(&[-3.0, -2.0, 0.0, 1.5, 4.0, 7.0]),
        };
        insta::assert_snapshot!(output(|out| filter.run(out)), @"-3 7");
    }

    #[test]
    fn test_stats() {
        let stats = Stats {
            values: values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
        };
        insta::assert_snapshot!(output(|out| stats.run(out)), @r###"
        count: 11
        sum: 55
        min: 0
        max: 10
        average: 5
        "###);
    }

    #[test]
    fn test_stats_empty() {
        let stats = Stats { values: values(&[]) };
        insta::assert_snapshot!(output(|out| stats.run(out)), @r###"
        count: 0
        sum: 0
        min: -
        max: -
        average: -
        "###);
    }

    #[test]
    fn test_sort() {
        let sort = Sort {
            values: values(&[0.5, -1.0, 3.0, -1.0]),
        };
        insta::assert_snapshot!(output(|out| sort.run(out)), @"-1 -1 0.5 3");
    }

    #[test]
    fn test_distinct() {
        let distinct = Distinct {
            values: values(&[2.0, 1.0, 2.0, 0.5, 1.0]),
        };
        insta::assert_snapshot!(output(|out| distinct.run(out)), @"2 1 0.5");
    }
}
