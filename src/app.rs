use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing::{debug, info};

use crate::{
    auth::AuthGuard,
    cli::Command,
    config::Config,
    context::{create_context, PostdeckContext},
    controller::{ScreenController, Submission},
    identity::{FileStore, StoredIdentity},
    input::{ScreenInput, HELP},
    model::{Post, SessionIdentity},
    view, PostdeckError,
};

type Result<T> = std::result::Result<T, PostdeckError>;

pub struct App {
    controller: ScreenController<PostdeckContext>,
}

impl App {
    pub fn boot(config: &Config) -> Result<Self> {
        let context = create_context(config)?;
        debug!(
            "using {} with identity store {}",
            context.api.base_url(),
            context.identity.store().path().display()
        );

        Ok(Self {
            controller: ScreenController::new(context),
        })
    }

    fn identity(&self) -> &StoredIdentity<FileStore> {
        &self.controller.context().identity
    }

    pub async fn run(&self, command: Option<Command>) -> Result<()> {
        match command {
            None => self.screen().await,
            Some(Command::List) => {
                self.mount().await?;
                self.draw()
            }
            Some(Command::Create { title, content }) => {
                self.mount().await?;
                self.controller.set_title(title);
                self.controller.set_content(content);
                let outcome = self.controller.submit_create().await;
                self.report(outcome)
            }
            Some(Command::Update { id, title, content }) => {
                self.mount().await?;
                self.controller.edit(&Post {
                    id,
                    title,
                    content,
                    author: String::new(),
                });
                let outcome = self.controller.submit_update().await;
                self.report(outcome)
            }
            Some(Command::Delete { id }) => {
                self.mount().await?;
                let outcome = self.controller.submit_delete(id).await;
                self.report(outcome)
            }
            Some(Command::Login {
                token,
                author_id,
                author_name,
            }) => {
                let identity = SessionIdentity {
                    auth_token: token,
                    author_id,
                    author_name,
                };
                self.identity().save(&identity).await?;
                info!("Logged in as {} ({})", identity.author_name, identity.author_id);
                println!("Logged in as {}", identity.author_name);
                Ok(())
            }
            Some(Command::Logout) => {
                self.identity().clear().await?;
                println!("Logged out");
                Ok(())
            }
            Some(Command::Whoami) => {
                match self.identity().load().await? {
                    Some(identity) => {
                        println!("{} (author id {})", identity.author_name, identity.author_id)
                    }
                    None => println!("Not logged in"),
                }
                Ok(())
            }
            Some(Command::ConfigTemplate) | Some(Command::ConfigInit) => Ok(()),
        }
    }

    /// The guarded mount every screen operation starts from.
    async fn mount(&self) -> Result<()> {
        AuthGuard::check(self.identity()).await?;
        self.controller.mount().await;
        Ok(())
    }

    fn draw(&self) -> Result<()> {
        let alerts = self.controller.take_alerts();
        let state = self.controller.state();
        println!("{}", view::render_screen(&state, &alerts)?);

        Ok(())
    }

    fn report(&self, outcome: Submission) -> Result<()> {
        match outcome {
            Submission::Sent { .. } => self.draw(),
            Submission::Invalid => {
                eprintln!("Nothing was sent: title and content are required");
                Ok(())
            }
            Submission::NoAuthor => {
                eprintln!("Nothing was sent: no author id is stored for this session");
                Ok(())
            }
            Submission::NotEditing => Ok(()),
        }
    }

    pub async fn screen(&self) -> Result<()> {
        self.mount().await?;
        self.draw()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = match line.parse::<ScreenInput>() {
                Ok(input) => input,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            match input {
                ScreenInput::Quit => break,
                ScreenInput::Nothing => continue,
                ScreenInput::Help => {
                    println!("{HELP}");
                    continue;
                }
                ScreenInput::Refresh => self.controller.load_posts().await,
                ScreenInput::Title(title) => self.controller.set_title(title),
                ScreenInput::Content(content) => self.controller.set_content(content),
                ScreenInput::Edit(id) => {
                    if !self.controller.edit_listed(id) {
                        println!("Post #{id} is not in the list");
                        continue;
                    }
                }
                ScreenInput::Submit => {
                    self.controller.submit().await;
                }
                ScreenInput::Delete(id) => {
                    self.controller.submit_delete(id).await;
                }
            }

            self.draw()?;
        }

        Ok(())
    }
}
