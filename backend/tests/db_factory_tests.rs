//! Tests for db::factory module - repository creation and configuration.

mod support;

use std::str::FromStr;

use arrbo_backend::db::factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
use arrbo_backend::db::{
    AverageRepository, GameRepository, PositionRepository, RepositoryError,
};

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}

#[test]
fn test_repository_type_from_str_postgres() {
    assert_eq!(
        RepositoryType::from_str("POSTGRES").unwrap(),
        RepositoryType::Postgres
    );
    assert_eq!(
        RepositoryType::from_str("pg").unwrap(),
        RepositoryType::Postgres
    );
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("sqlite");
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(&support::CLEAN_REPOSITORY_ENV, || {
        assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_with_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/arrbo")),
        ],
        || {
            assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Postgres);
        },
    );
}

#[test]
fn test_explicit_type_overrides_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("PG_DATABASE_URL", Some("postgres://localhost/arrbo")),
        ],
        || {
            assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_invalid() {
    let mut env = support::CLEAN_REPOSITORY_ENV.to_vec();
    env.push(("REPOSITORY_TYPE", Some("postgress")));

    support::with_scoped_env(&env, || {
        let err = RepositoryType::from_env().unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
        assert!(err.to_string().contains("postgress"));

        assert!(matches!(
            RepositoryBuilder::new().from_env(),
            Err(RepositoryError::ConfigurationError { .. })
        ));
        block_on(async {
            assert!(matches!(
                RepositoryFactory::from_env().await,
                Err(RepositoryError::ConfigurationError { .. })
            ));
        })
    });
}

#[cfg(feature = "local-repo")]
#[test]
fn test_from_env_local_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let seed = support::write_sample_seed(dir.path());
    let seed = seed.to_str().unwrap();

    let mut env = support::CLEAN_REPOSITORY_ENV.to_vec();
    env.push(("LOCAL_SEED_PATH", Some(seed)));

    support::with_scoped_env(&env, || {
        block_on(async {
            let repo = RepositoryFactory::from_env().await.unwrap();
            assert_eq!(repo.find_all_games().await.unwrap().len(), 3);
            assert_eq!(repo.find_all_averages().await.unwrap().len(), 1);
        })
    });
}

#[cfg(feature = "local-repo")]
#[test]
fn test_from_env_local_without_seed_is_empty() {
    support::with_scoped_env(&support::CLEAN_REPOSITORY_ENV, || {
        block_on(async {
            let repo = RepositoryFactory::from_env().await.unwrap();
            assert!(repo.health_check().await.unwrap());
            assert!(repo.find_all_games().await.unwrap().is_empty());
        })
    });
}

#[cfg(feature = "local-repo")]
#[test]
fn test_from_env_prefers_config_file() {
    let dir = tempfile::tempdir().unwrap();
    support::write_sample_seed(dir.path());
    let config = dir.path().join("repository.toml");
    std::fs::write(
        &config,
        "[repository]\ntype = \"local\"\n\n[local]\nseed_path = \"seed.json\"\n",
    )
    .unwrap();
    let config = config.to_str().unwrap();

    let mut env = support::CLEAN_REPOSITORY_ENV.to_vec();
    env.push(("REPOSITORY_CONFIG", Some(config)));
    // Ignored while REPOSITORY_CONFIG is set.
    env.push(("REPOSITORY_TYPE", Some("postgres")));

    support::with_scoped_env(&env, || {
        block_on(async {
            let repo = RepositoryFactory::from_env().await.unwrap();
            assert_eq!(repo.find_distinct_game_dates().await.unwrap().len(), 2);
        })
    });
}

#[tokio::test]
async fn test_from_config_file_missing_file() {
    let result = RepositoryFactory::from_config_file("/nonexistent/repository.toml").await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[tokio::test]
async fn test_from_config_file_invalid_type() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("repository.toml");
    std::fs::write(&config, "[repository]\ntype = \"mongo\"\n").unwrap();

    let err = match RepositoryFactory::from_config_file(&config).await {
        Err(e) => e,
        Ok(_) => panic!("unknown repository type accepted"),
    };
    assert!(err.to_string().contains("Invalid repository type"));
}

#[cfg(feature = "local-repo")]
#[tokio::test]
async fn test_builder_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    let seed = support::write_sample_seed(dir.path());

    let repo = RepositoryBuilder::new()
        .repository_type(RepositoryType::Local)
        .seed_path(seed)
        .build()
        .await
        .unwrap();

    assert_eq!(repo.find_all_positions().await.unwrap().len(), 1);
}

#[cfg(feature = "local-repo")]
#[tokio::test]
async fn test_builder_malformed_seed_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("seed.json");
    std::fs::write(&seed, r#"{"games": [{"gameId": 5}]}"#).unwrap();

    let result = RepositoryBuilder::new()
        .repository_type(RepositoryType::Local)
        .seed_path(&seed)
        .build()
        .await;

    assert!(matches!(result, Err(RepositoryError::ValidationError { .. })));
}

#[cfg(not(feature = "postgres-repo"))]
#[test]
fn test_postgres_selected_without_feature() {
    let mut env = support::CLEAN_REPOSITORY_ENV.to_vec();
    env.push(("REPOSITORY_TYPE", Some("postgres")));

    support::with_scoped_env(&env, || {
        block_on(async {
            let result = RepositoryFactory::from_env().await;
            assert!(matches!(
                result,
                Err(RepositoryError::ConfigurationError { .. })
            ));
        })
    });
}
