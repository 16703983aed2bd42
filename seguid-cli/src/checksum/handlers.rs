use std::io::{self, BufRead};

use anyhow::{Result, bail};
use clap::ArgMatches;
use log::debug;

use seguid_core::manipulation::reverse_complement_dna;
use seguid_core::{
    ChecksumKind, Form, SequenceSpec, StrandPair, ccseguid, cdseguid, csseguid, ldseguid,
    lsseguid, parse_sequence_string, seguid, seguidv1, seguidv1_urlsafe,
};

use super::cli::*;

pub fn run_checksum(matches: &ArgMatches) -> Result<()> {
    let kind: ChecksumKind = matches
        .get_one::<String>(TYPE_ARG)
        .map(String::as_str)
        .unwrap_or(DEFAULT_TYPE)
        .parse()?;

    let alphabet = matches
        .get_one::<String>(ALPHABET_ARG)
        .map(String::as_str)
        .unwrap_or(kind.default_alphabet());

    let form: Form = matches
        .get_one::<String>(FORM_ARG)
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORM)
        .parse()?;

    debug!("type={} alphabet={} form={}", kind, alphabet, form);

    let sequence = read_sequence(io::stdin().lock())?;
    let checksum = process_sequence(&sequence, kind, alphabet, form)?;
    println!("{}", checksum);

    Ok(())
}

/// Reads every line of `reader` and joins them with `\n`, so two lines
/// form a `WATSON\nREVCRICK` double-stranded sequence.
pub fn read_sequence<R: BufRead>(reader: R) -> Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Computes the checksum of `sequence` as read from the command line.
///
/// Single-stranded kinds digest the input verbatim. Double-stranded kinds
/// parse it first; `ccseguid` also accepts a single DNA strand and derives
/// the Crick strand from it.
pub fn process_sequence(
    sequence: &str,
    kind: ChecksumKind,
    alphabet: &str,
    form: Form,
) -> Result<String> {
    let checksum = match kind {
        ChecksumKind::Seguid => seguid(sequence, alphabet, form)?,
        ChecksumKind::Lsseguid => lsseguid(sequence, alphabet, form)?,
        ChecksumKind::Csseguid => csseguid(sequence, alphabet, form)?,
        ChecksumKind::SeguidV1 => seguidv1(sequence, alphabet, form)?,
        ChecksumKind::SeguidV1UrlSafe => seguidv1_urlsafe(sequence, alphabet, form)?,
        ChecksumKind::Ldseguid => {
            let pair = double_stranded(sequence)?;
            ldseguid(pair.watson(), pair.crick(), alphabet, form)?
        }
        ChecksumKind::Cdseguid => {
            let pair = double_stranded(sequence)?;
            cdseguid(pair.watson(), pair.crick(), alphabet, form)?
        }
        ChecksumKind::Ccseguid => match parse_sequence_string(sequence)? {
            SequenceSpec::DoubleStranded(pair) => {
                ccseguid(pair.watson(), pair.crick(), alphabet, form)?
            }
            SequenceSpec::SingleStranded(strand) => {
                let watson = strand.to_uppercase();
                let crick = reverse_complement_dna(&watson)?;
                debug!("derived crick strand {}", crick);
                ccseguid(&watson, &crick, alphabet, form)?
            }
        },
    };

    Ok(checksum)
}

fn double_stranded(sequence: &str) -> Result<StrandPair> {
    match parse_sequence_string(sequence)? {
        SequenceSpec::DoubleStranded(pair) => Ok(pair),
        SequenceSpec::SingleStranded(_) => bail!("Double-stranded sequence expected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[rstest]
    #[case("ACGT\n", "ACGT")]
    #[case("ACGT", "ACGT")]
    #[case("-TATGCC\r\nCATACG-\r\n", "-TATGCC\nCATACG-")]
    #[case("", "")]
    fn test_read_sequence(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(read_sequence(Cursor::new(input)).unwrap(), expected);
    }

    #[rstest]
    #[case(ChecksumKind::Seguid, "AT", "seguid=Ax/RG6hzSrMEEWoCO1IWMGska+4")]
    #[case(ChecksumKind::Lsseguid, "ACGT", "lsseguid=IQiZThf2zKn_I1KtqStlEdsHYDQ")]
    #[case(ChecksumKind::Csseguid, "GTAC", "csseguid=IQiZThf2zKn_I1KtqStlEdsHYDQ")]
    #[case(
        ChecksumKind::Ldseguid,
        "-TATGCC;-GCATAC",
        "ldseguid=rr65d6AYuP-CdMaVmdw3L9FPt6I"
    )]
    #[case(
        ChecksumKind::Ldseguid,
        "-TATGCC\nCATACG-",
        "ldseguid=rr65d6AYuP-CdMaVmdw3L9FPt6I"
    )]
    #[case(
        ChecksumKind::Cdseguid,
        "ACGTT;AACGT",
        "cdseguid=5fHMG19IbYxn7Yr7_sOCkvaaw7U"
    )]
    #[case(
        ChecksumKind::Ccseguid,
        "GTATGCC;GGCATAC",
        "ccseguid=mmpe6Aic0xcdpqiP_0kweHdCiVs"
    )]
    fn test_process_sequence(
        #[case] kind: ChecksumKind,
        #[case] sequence: &str,
        #[case] expected: &str,
    ) {
        let checksum =
            process_sequence(sequence, kind, kind.default_alphabet(), Form::Long).unwrap();
        assert_eq!(checksum, expected);
    }

    #[rstest]
    #[case("GTATGCC")]
    #[case("gtatgcc")]
    fn test_ccseguid_derives_crick_from_single_strand(#[case] sequence: &str) {
        assert_eq!(
            process_sequence(sequence, ChecksumKind::Ccseguid, "{DNA}", Form::Long).unwrap(),
            "ccseguid=mmpe6Aic0xcdpqiP_0kweHdCiVs"
        );
    }

    #[rstest]
    fn test_ccseguid_single_strand_uses_given_alphabet() {
        let err = process_sequence("GTATGCC", ChecksumKind::Ccseguid, "{RNA}", Form::Long)
            .unwrap_err();
        assert_eq!(err.to_string(), "Detected symbols T not in the 'alphabet'");
    }

    #[rstest]
    fn test_protein_defaults() {
        let kind = ChecksumKind::SeguidV1UrlSafe;
        assert_eq!(
            process_sequence(
                "MGDRSEGPGPTRPGPPGIGP",
                kind,
                kind.default_alphabet(),
                Form::Short
            )
            .unwrap(),
            "N_Dxui"
        );
    }

    #[rstest]
    #[case(ChecksumKind::Ldseguid)]
    #[case(ChecksumKind::Cdseguid)]
    fn test_single_strand_rejected_for_double_stranded_kinds(#[case] kind: ChecksumKind) {
        let err = process_sequence("ACGT", kind, "{DNA}", Form::Long).unwrap_err();
        assert_eq!(err.to_string(), "Double-stranded sequence expected");
    }

    #[rstest]
    fn test_library_errors_pass_through() {
        let err = process_sequence("ACGT;TGC", ChecksumKind::Ldseguid, "{DNA}", Form::Long)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Watson and Crick strands must be equal length (4 != 3)"
        );
    }
}
