use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::error::ProjectionError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("계산 오류: {0}")]
    Projection(#[from] ProjectionError),
    #[error("결과 직렬화 오류: {0}")]
    Render(#[from] toml::ser::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경 시와 종료 시 설정 파일을 저장한다.
/// `input`이 EOF에 도달하면 종료 메뉴와 같이 저장 후 빠져나온다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr, input)? {
            MenuChoice::RunProjection => ui_cli::handle_run(tr, config)?,
            MenuChoice::Vehicle => ui_cli::handle_vehicle(tr, config, input)?,
            MenuChoice::Market => ui_cli::handle_market(tr, config, input)?,
            MenuChoice::Partnership => ui_cli::handle_partnership(tr, config, input)?,
            MenuChoice::UserGrowth => ui_cli::handle_user_growth(tr, config, input)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config, input)? {
                    let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
