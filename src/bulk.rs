use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::{Error, LearningStyle, Response, QUESTIONS};

/// Reads recorded answer sheets, one CSV record per respondent.
///
/// The first row is a header (`id,q1,...,q16`). Each record holds the
/// respondent id followed by one cell per question: a style initial or name,
/// or an empty cell for a skipped question. A malformed record yields an
/// error for that record only.
pub fn read_bulk<R: Read>(reader: R) -> impl Iterator<Item = Result<(String, Vec<Response>), Error>> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| parse_record(&record?))
}

fn parse_record(record: &StringRecord) -> Result<(String, Vec<Response>), Error> {
    let id = record.get(0).unwrap_or_default().to_string();
    let found = record.len().saturating_sub(1);
    if found != QUESTIONS.len() {
        return Err(Error::IllegalRecord {
            id,
            found,
            expected: QUESTIONS.len(),
        });
    }
    let responses = record
        .iter()
        .skip(1)
        .zip(QUESTIONS.questions())
        .map(|(cell, question)| {
            let style = match cell {
                "" => None,
                cell => Some(cell.parse::<LearningStyle>()?),
            };
            Ok(Response::new(question.id, style))
        })
        .collect::<Result<Vec<Response>, Error>>()?;
    Ok((id, responses))
}
