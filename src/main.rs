use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use vehicle_tco_toolbox::app::{self, AppError};
use vehicle_tco_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use vehicle_tco_toolbox::i18n::{self, keys, Translator};
use vehicle_tco_toolbox::report::{self, OutputFormat};
use vehicle_tco_toolbox::tco;

/// 차량 보유비용(TCO)과 파트너십 수익을 예측한다.
#[derive(Debug, Parser)]
#[command(name = "vehicle_tco_toolbox", version, about)]
struct Cli {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 메뉴 없이 보고서를 한 번 출력하고 종료
    #[arg(long)]
    batch: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long)]
    vehicle_type: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    mileage: Option<u32>,
    #[arg(long)]
    years: Option<u32>,
    #[arg(long)]
    tier: Option<String>,
    #[arg(long)]
    partners: Option<u32>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 배치 보고서 또는 CLI 메뉴를 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let fallback = Translator::new(&i18n::resolve_language(&cli.lang, None));
    if let Err(err) = try_run(cli) {
        eprintln!("{}: {err}", fallback.t(keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let scenario = &mut cfg.scenario;
    if let Some(v) = cli.vehicle_type {
        scenario.vehicle.vehicle_type = v;
    }
    if let Some(v) = cli.price {
        scenario.vehicle.base_price = v;
    }
    if let Some(v) = cli.mileage {
        scenario.vehicle.annual_mileage = v;
    }
    if let Some(v) = cli.years {
        scenario.vehicle.ownership_years = v;
    }
    if let Some(v) = cli.tier {
        scenario.partnership.tier = v;
    }
    if let Some(v) = cli.partners {
        scenario.partnership.partner_count = v;
    }

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::debug!("language resolved: {}", tr.language_code());

    if cli.batch {
        let projection = tco::project(&cfg.scenario.to_input()?)?;
        match cli.format {
            OutputFormat::Text => println!("{}", report::render_text(&projection, &tr)),
            OutputFormat::Toml => println!("{}", report::render_toml(&projection)?),
        }
        return Ok(());
    }
    app::run(&mut cfg, &cli.config, &mut tr, &mut std::io::stdin().lock())
}
