use flyer_chef::{AppConfig, ImageSource, OpenAIProvider, RecipeError, RecipeGenerator};
use env_logger::Env;
use log::debug;
use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn print_usage(program: &str) {
    println!("🍳 レシピジェネレーターの使い方 🍳");
    println!("----------------------------------------");
    println!("{} <画像URL>", program);
    println!("\n例えば、こんな感じです：");
    println!("{} https://example.com/food-image.jpg", program);
    println!("\nスーパーのチラシやお料理の写真のURLを指定してくださいね！");
}

async fn run(image_arg: &str) -> Result<(), RecipeError> {
    let config = AppConfig::load()?;
    let provider = OpenAIProvider::new(&config.openai)?;
    let generator = RecipeGenerator::new(&provider, &config.openai);

    let image = ImageSource::from_arg(image_arg);
    generator.run(&image, &mut io::stdout().lock()).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Silent unless RUST_LOG asks for output; stdout carries the only error line
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if args.len() != 2 {
        let program = args
            .first()
            .and_then(|arg| Path::new(arg).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("flyer-chef");
        print_usage(program);
        return ExitCode::FAILURE;
    }

    match run(&args[1]).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_config() {
                debug!("Could not load configuration: {:?}", e);
            } else {
                debug!("Recipe generation failed: {:?}", e);
            }
            println!("😢 申し訳ありません。エラーが発生しました: {}", e);
            ExitCode::FAILURE
        }
    }
}
