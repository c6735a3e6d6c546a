#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Variables are restored on unwind, and access to the process environment is
/// serialized across the parallel test threads.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Every variable the repository factory reads, cleared.
pub const CLEAN_REPOSITORY_ENV: [(&str, Option<&str>); 5] = [
    ("REPOSITORY_TYPE", None),
    ("REPOSITORY_CONFIG", None),
    ("DATABASE_URL", None),
    ("PG_DATABASE_URL", None),
    ("LOCAL_SEED_PATH", None),
];

/// A small slate: two games on 2024-01-15 (one without a start time),
/// one on 2024-01-17, and one row in every other table.
pub const SAMPLE_SEED: &str = r#"{
  "games": [
    {
      "gameId": "0022400560",
      "gameDate": "2024-01-15",
      "startTimeUtc": null,
      "statusText": "PPD",
      "homeTeamId": 9,
      "homeTeamAbbr": "GSW",
      "homeTeamScore": null,
      "awayTeamId": 17,
      "awayTeamAbbr": "MEM",
      "awayTeamScore": null
    },
    {
      "gameId": "0022400555",
      "gameDate": "2024-01-15",
      "startTimeUtc": "2024-01-15T20:00:00Z",
      "statusText": "Final",
      "homeTeamId": 2,
      "homeTeamAbbr": "BOS",
      "homeTeamScore": 118,
      "awayTeamId": 10,
      "awayTeamAbbr": "HOU",
      "awayTeamScore": 101
    },
    {
      "gameId": "0022400580",
      "gameDate": "2024-01-17",
      "startTimeUtc": "2024-01-18T00:30:00Z",
      "statusText": "7:30 pm ET",
      "homeTeamId": 14,
      "homeTeamAbbr": "LAL",
      "homeTeamScore": null,
      "awayTeamId": 7,
      "awayTeamAbbr": "DAL",
      "awayTeamScore": null
    }
  ],
  "averages": [
    {
      "id": 1,
      "playerName": "Luka Doncic",
      "playerPts": 33.9,
      "playerReb": 9.2,
      "playerAst": 9.8,
      "playerPra": 52.9
    }
  ],
  "positions": [
    { "id": 1, "playerName": "Luka Doncic", "playerPosition": "PG" }
  ],
  "topUsagePlayers": [
    {
      "teamId": 7,
      "player1Name": "Luka Doncic",
      "player1Usage": 35.8,
      "player2Name": "Kyrie Irving",
      "player2Usage": 27.1,
      "player3Name": "Tim Hardaway Jr.",
      "player3Usage": 21.0,
      "player4Name": null,
      "player4Usage": null,
      "player5Name": null,
      "player5Usage": null
    }
  ],
  "defensiveEfficiency": [
    {
      "teamId": 7,
      "pgEfficiency": 1.02,
      "sgEfficiency": 0.98,
      "sfEfficiency": 1.05,
      "pfEfficiency": 0.97,
      "cEfficiency": 1.11
    }
  ]
}"#;

/// Write [`SAMPLE_SEED`] into `dir` and return its path.
pub fn write_sample_seed(dir: &Path) -> PathBuf {
    let path = dir.join("seed.json");
    std::fs::write(&path, SAMPLE_SEED).unwrap();
    path
}
