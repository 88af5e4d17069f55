//! Raw assignment boundary type
//!
//! A generator answers with nested arrays of player ids:
//! `{"rawRounds": [[["p1","p2","p3","p4"], ...], ...]}`.
//! The text is parsed and validated here once; everything downstream works
//! with the typed [`RawAssignment`].

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ScheduleError};
use crate::model::UNKNOWN_PLAYER_ID;

/// Four ids in raw order: [T1P1, T1P2, T2P1, T2P2]
pub type RawMatch = [String; 4];

/// Validated raw pairings, ordered by round then by match
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RawAssignment {
    #[serde(rename = "rawRounds")]
    rounds: Vec<Vec<RawMatch>>,
}

/// A player id repeated inside a single match
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DuplicateSlot {
    pub round_number: usize,
    pub court_number: usize,
    pub player_id: String,
}

impl RawAssignment {
    /// Parse generator output text
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Validate an already-decoded JSON value.
    ///
    /// Accepts either `{"rawRounds": [...]}` or the bare rounds array.
    /// Empty-string and `null` slots become [`UNKNOWN_PLAYER_ID`]; any other
    /// non-string entry, or a tuple that is not exactly four long, is
    /// rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let rounds = match value {
            Value::Object(map) => map
                .get("rawRounds")
                .ok_or_else(|| ScheduleError::MalformedShape("missing \"rawRounds\"".into()))?,
            other => other,
        };
        let rounds = rounds
            .as_array()
            .ok_or_else(|| ScheduleError::MalformedShape("rounds must be an array".into()))?;

        let mut parsed = Vec::with_capacity(rounds.len());
        for (r, round) in rounds.iter().enumerate() {
            let matches = round.as_array().ok_or_else(|| {
                ScheduleError::MalformedShape(format!("round {} is not an array", r + 1))
            })?;
            let mut parsed_round = Vec::with_capacity(matches.len());
            for (m, tuple) in matches.iter().enumerate() {
                parsed_round.push(parse_tuple(tuple, r + 1, m + 1)?);
            }
            parsed.push(parsed_round);
        }

        Ok(Self { rounds: parsed })
    }

    /// Build from in-memory id lists, enforcing the same arity rule as parsing
    pub fn from_rounds(rounds: Vec<Vec<Vec<String>>>) -> Result<Self> {
        let mut parsed = Vec::with_capacity(rounds.len());
        for (r, round) in rounds.into_iter().enumerate() {
            let mut parsed_round = Vec::with_capacity(round.len());
            for (m, ids) in round.into_iter().enumerate() {
                let len = ids.len();
                let tuple: RawMatch = ids.try_into().map_err(|_| ScheduleError::WrongArity {
                    round: r + 1,
                    match_number: m + 1,
                    len,
                })?;
                parsed_round.push(tuple.map(normalize_id));
            }
            parsed.push(parsed_round);
        }
        Ok(Self { rounds: parsed })
    }

    pub fn rounds(&self) -> &[Vec<RawMatch>] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Ids occurring more than once within the same match.
    ///
    /// These pass through reconstruction unchanged; this is only a report.
    pub fn duplicate_slots(&self) -> Vec<DuplicateSlot> {
        let mut found = Vec::new();
        for (r, round) in self.rounds.iter().enumerate() {
            for (m, ids) in round.iter().enumerate() {
                for (i, id) in ids.iter().enumerate() {
                    if id == UNKNOWN_PLAYER_ID {
                        continue;
                    }
                    // Report each repeated id once, at its first position
                    let first = ids.iter().position(|other| other == id) == Some(i);
                    let repeated = ids[i + 1..].contains(id);
                    if first && repeated {
                        found.push(DuplicateSlot {
                            round_number: r + 1,
                            court_number: m + 1,
                            player_id: id.clone(),
                        });
                    }
                }
            }
        }
        found
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn parse_tuple(tuple: &Value, round: usize, match_number: usize) -> Result<RawMatch> {
    let ids = tuple.as_array().ok_or_else(|| {
        ScheduleError::MalformedShape(format!(
            "round {round}, match {match_number} is not an array"
        ))
    })?;
    if ids.len() != 4 {
        return Err(ScheduleError::WrongArity {
            round,
            match_number,
            len: ids.len(),
        });
    }

    let mut slots: [String; 4] = Default::default();
    for (slot, id) in slots.iter_mut().zip(ids) {
        *slot = match id {
            Value::String(s) => normalize_id(s.clone()),
            Value::Null => UNKNOWN_PLAYER_ID.to_string(),
            other => {
                return Err(ScheduleError::MalformedShape(format!(
                    "round {round}, match {match_number}: player id {other} is not a string"
                )))
            }
        };
    }
    Ok(slots)
}

fn normalize_id(id: String) -> String {
    if id.is_empty() {
        UNKNOWN_PLAYER_ID.to_string()
    } else {
        id
    }
}
