use std::io::Write;

use clap::Parser;
use myquery_logic::query;

const NUMBERS: [i32; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Debug, Parser)]
pub(crate) struct Demo {}

impl Demo {
    pub(crate) fn run(&self, out: &mut impl Write) -> Result<(), anyhow::Error> {
        writeln!(out, "Demo MyQuery")?;

        let strings = query::map(Some(&NUMBERS), Some(|i: &i32| i.to_string()))?;
        let doubles = query::map(Some(&NUMBERS), Some(|i: &i32| f64::from(*i)))?;
        writeln!(out, "strings: {:?}", strings.to_list())?;
        writeln!(out, "doubles: {:?}", doubles.to_list())?;

        let even = query::filter(Some(&NUMBERS), Some(|i: &i32| i % 2 == 0))?;
        writeln!(out, "even: {:?}", even.to_list())?;
        writeln!(
            out,
            "sum: {}, average: {:?}",
            query::sum(Some(&NUMBERS), Some(|i: &i32| *i))?,
            query::average(Some(&NUMBERS), Some(|i: &i32| *i))?
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        Demo {}.run(&mut out).unwrap();
        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r###"
        Demo MyQuery
        strings: ["1", "2", "3", "4", "5", "6"]
        doubles: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        even: [2, 4, 6]
        sum: 21, average: Some(3.5)
        "###);
    }
}
