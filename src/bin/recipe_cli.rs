use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use recipe_scout::{
    browser::BrowserState,
    browser::RecipeBrowser,
    config::AppConfig,
    image::ImageSource,
    models::Recipe,
    notifications::{Notification, NotificationBus, NotificationKind},
    state::AppState,
};

const HELP: &str = "Type a dish, an ingredient or a craving to get recipe ideas.
  :fav N    save or unsave item N
  :show N   show item N in full
  :clear    clear the search and go back to favorites
  :help     show this text
  :quit     exit";

#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Favorite(usize),
    Show(usize),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, arg) = line
            .split_once(char::is_whitespace)
            .map(|(head, arg)| (head, arg.trim()))
            .unwrap_or((line, ""));

        let index = |arg: &str| arg.parse::<usize>().ok().filter(|n| *n > 0);

        match head {
            ":quit" | ":q" => Command::Quit,
            ":help" | ":h" => Command::Help,
            ":clear" => Command::Clear,
            ":fav" => index(arg)
                .map(Command::Favorite)
                .unwrap_or_else(|| Command::Unknown(line.to_string())),
            ":show" => index(arg)
                .map(Command::Show)
                .unwrap_or_else(|| Command::Unknown(line.to_string())),
            cmd if cmd.starts_with(':') => Command::Unknown(line.to_string()),
            _ => Command::Search(line.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;

    let bus = NotificationBus::default();
    let mut notifications = bus.subscribe();
    let mut browser = RecipeBrowser::new(Arc::clone(&state.recipes), bus);

    println!("{HELP}\n");
    render(browser.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Help => println!("{HELP}"),
                    Command::Clear => {
                        browser.on_query_changed("");
                        render(browser.state());
                    }
                    Command::Search(query) => {
                        browser.on_query_changed(query);
                        println!("Looking for recipes...");
                        browser.on_search().await;
                        render(browser.state());
                    }
                    Command::Show(n) => match displayed(browser.state()).get(n - 1).cloned() {
                        Some(recipe) => {
                            browser.on_recipe_selected(recipe);
                            if let Some(selected) = &browser.state().selected {
                                print_recipe(selected);
                            }
                        }
                        None => println!("No item {n}."),
                    },
                    Command::Favorite(n) => {
                        let state = browser.state();
                        let Some(recipe) = displayed(state).get(n - 1).cloned() else {
                            println!("No item {n}.");
                            continue;
                        };
                        let is_favorite = state.show_favorites || state.favorite_ids.contains(&recipe.id);
                        if let Err(err) = browser.on_favorite_clicked(&recipe, is_favorite).await {
                            tracing::error!(error = %err, "could not update favorites");
                            println!("Could not update favorites: {err}");
                        }
                        render(browser.state());
                    }
                    Command::Unknown(input) => println!("Unknown command {input:?}, try :help"),
                }
            }
            Ok(notification) = notifications.recv() => print_notification(&notification),
            changed = browser.next_favorites() => {
                if !changed {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn displayed(state: &BrowserState) -> &[Recipe] {
    if state.show_favorites {
        &state.favorites
    } else {
        &state.recipes
    }
}

fn render(state: &BrowserState) {
    let items = displayed(state);
    if state.show_favorites {
        println!("Your favorites:");
    } else if items.is_empty() {
        println!("Nothing to show yet. Search for something tasty.");
        return;
    } else {
        println!("Suggestions for {:?}:", state.query);
    }

    for (n, recipe) in items.iter().enumerate() {
        let marker = if state.show_favorites || state.favorite_ids.contains(&recipe.id) {
            '*'
        } else {
            ' '
        };
        println!("{marker} {:>2}. {} ({})", n + 1, recipe.title, recipe.duration);
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("\n{}  [{}]", recipe.title, recipe.duration);
    match ImageSource::from_url(&recipe.image_url) {
        ImageSource::Inline { mime_type, bytes } => {
            println!("image: inline {mime_type}, {} bytes", bytes.len())
        }
        ImageSource::Remote(url) => println!("image: {url}"),
        ImageSource::Missing => {}
    }
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nSteps:");
    for (n, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", n + 1);
    }
    println!();
}

fn print_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Error => println!("! {}", notification.message),
        NotificationKind::Info => println!("> {}", notification.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_searches() {
        assert_eq!(Command::parse("  :fav 2 "), Command::Favorite(2));
        assert_eq!(Command::parse(":show 10"), Command::Show(10));
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":clear"), Command::Clear);
        assert_eq!(
            Command::parse("vegan lasagna"),
            Command::Search("vegan lasagna".into())
        );
        assert_eq!(Command::parse(""), Command::Search(String::new()));
    }

    #[test]
    fn rejects_bad_indexes() {
        assert_eq!(Command::parse(":fav 0"), Command::Unknown(":fav 0".into()));
        assert_eq!(Command::parse(":show x"), Command::Unknown(":show x".into()));
        assert_eq!(Command::parse(":dance"), Command::Unknown(":dance".into()));
    }
}
