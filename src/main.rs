mod config;
mod error;
mod quiz;
mod screen;

use std::sync::Arc;

use dotenv::dotenv;
use log::{debug, info};
use quiz::{strings, CheatExchange, CheatRequest, QuestionBank, QuizSession, SessionSnapshot};
use screen::{CheatAction, QuizAction};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, InMemStorage, SqliteStorage, Storage},
    prelude::*,
    types::KeyboardMarkup,
    utils::command::BotCommands,
};

use crate::config::Config;
use crate::error::AppError;

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type SessionStorage = Arc<ErasedStorage<State>>;

/// Per-chat dialogue state. Whatever is stored here is all that survives
/// between two messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    Quiz {
        snapshot: SessionSnapshot,
    },
    Cheat {
        snapshot: SessionSnapshot,
        exchange: CheatExchange,
    },
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "show this text.")]
    Help,
    #[command(description = "start a new quiz attempt.")]
    Restart,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let dotenv_result = dotenv();
    pretty_env_logger::init();
    if let Err(err) = dotenv_result {
        debug!("No .env file loaded: {}", err);
    }
    info!("Starting geoquiz bot...");

    let config = Config::from_env();

    let bank = match &config.questions_file {
        Some(path) => {
            info!("Loading question bank from {}", path.display());
            QuestionBank::from_path(path)?
        }
        None => QuestionBank::geography(),
    };
    info!(
        "Question bank ready with {} questions, {} of them true",
        bank.len(),
        bank.iter().filter(|q| q.answer()).count()
    );
    let bank = Arc::new(bank);

    let storage: SessionStorage = match &config.dialogue_db {
        Some(path) => {
            info!("Opening dialogue storage at {}", path);
            SqliteStorage::open(path, Json)
                .await
                .map_err(|err| AppError::Storage(err.to_string()))?
                .erase()
        }
        None => {
            info!("Using in-memory dialogue storage");
            InMemStorage::<State>::new().erase()
        }
    };

    let bot = Bot::from_env();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(command),
            )
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::Quiz { snapshot }].endpoint(quiz_screen))
            .branch(dptree::case![State::Cheat { snapshot, exchange }].endpoint(cheat_screen)),
    )
    .dependencies(dptree::deps![storage, bank])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

const GREETING_TEXT: &str =
    "Hi! This is GeoQuiz. Answer each statement with True or False. Use the arrows to move between questions.";
const UNKNOWN_INPUT_TEXT: &str = "Please use the buttons below.";
const ALREADY_ANSWERED_TEXT: &str = "You have already answered this question.";

/// The reply to one incoming message, plus the state to store afterwards.
/// `next: None` leaves the stored state untouched.
#[derive(Debug)]
struct Transition {
    reply: String,
    keyboard: KeyboardMarkup,
    next: Option<State>,
}

/// Shows the current question and stores the session for the next message.
fn question_screen(session: &QuizSession) -> Transition {
    Transition {
        reply: screen::question_text(session),
        keyboard: screen::question_keyboard(session),
        next: Some(State::Quiz {
            snapshot: session.snapshot(),
        }),
    }
}

fn apply_quiz_action(mut session: QuizSession, action: Option<QuizAction>) -> Transition {
    let Some(action) = action else {
        return Transition {
            reply: UNKNOWN_INPUT_TEXT.to_string(),
            keyboard: screen::question_keyboard(&session),
            next: None,
        };
    };

    match action {
        QuizAction::Answer(_) if session.is_current_answered() => Transition {
            reply: ALREADY_ANSWERED_TEXT.to_string(),
            keyboard: screen::question_keyboard(&session),
            next: None,
        },
        QuizAction::Answer(user_answer) => {
            let verdict = session.check_answer(user_answer);
            debug!(
                "Question {} judged {:?}",
                session.current_index(),
                verdict
            );
            Transition {
                reply: strings::verdict_message(verdict).to_string(),
                keyboard: screen::question_keyboard(&session),
                next: Some(State::Quiz {
                    snapshot: session.snapshot(),
                }),
            }
        }
        QuizAction::Next => {
            session.move_to_next();
            debug!("Moved forward to question {}", session.current_index());
            question_screen(&session)
        }
        QuizAction::Prev => {
            session.move_to_prev();
            debug!("Moved back to question {}", session.current_index());
            question_screen(&session)
        }
        QuizAction::Cheat => {
            let exchange = CheatExchange::open(CheatRequest {
                answer_is_true: session.begin_cheat(),
            });
            debug!(
                "Opened cheat screen for question {}",
                session.current_index()
            );
            Transition {
                reply: strings::WARNING_TEXT.to_string(),
                keyboard: screen::cheat_keyboard(exchange.answer_shown()),
                next: Some(State::Cheat {
                    snapshot: session.snapshot(),
                    exchange,
                }),
            }
        }
    }
}

fn apply_cheat_action(
    bank: Arc<QuestionBank>,
    snapshot: SessionSnapshot,
    mut exchange: CheatExchange,
    action: Option<CheatAction>,
) -> Transition {
    match action {
        Some(CheatAction::ShowAnswer) => {
            let answer = exchange.reveal();
            Transition {
                reply: strings::answer_label(answer).to_string(),
                keyboard: screen::cheat_keyboard(exchange.answer_shown()),
                next: Some(State::Cheat { snapshot, exchange }),
            }
        }
        Some(CheatAction::Back) => {
            let mut session = QuizSession::restore(bank, Some(snapshot));
            let response = exchange.finish();
            session.resolve_cheat_response(Some(response));
            debug!(
                "Cheat screen closed, answer shown: {}, cheater: {}",
                response.answer_shown,
                session.is_cheater()
            );
            question_screen(&session)
        }
        None => Transition {
            reply: strings::WARNING_TEXT.to_string(),
            keyboard: screen::cheat_keyboard(exchange.answer_shown()),
            next: None,
        },
    }
}

async fn send_transition(
    bot: &Bot,
    dialogue: &QuizDialogue,
    msg: &Message,
    transition: Transition,
) -> HandlerResult {
    bot.send_message(msg.chat.id, transition.reply)
        .reply_markup(transition.keyboard)
        .await?;

    if let Some(state) = transition.next {
        dialogue.update(state).await?;
    }
    Ok(())
}

async fn start(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    msg: Message,
) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;
    send_transition(&bot, &dialogue, &msg, question_screen(&QuizSession::new(bank))).await
}

async fn command(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    cmd: Command,
    msg: Message,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Restart => {
            info!("Chat {} restarted the quiz", msg.chat.id.0);
            bot.send_message(msg.chat.id, "Starting over.").await?;
            let transition = question_screen(&QuizSession::new(bank));
            send_transition(&bot, &dialogue, &msg, transition).await?;
        }
    }
    Ok(())
}

async fn quiz_screen(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    snapshot: SessionSnapshot,
    msg: Message,
) -> HandlerResult {
    let session = QuizSession::restore(bank, Some(snapshot));
    debug!(
        "Chat {}: restored session at question {}",
        msg.chat.id.0,
        session.current_index()
    );

    let action = msg.text().and_then(QuizAction::parse);
    send_transition(&bot, &dialogue, &msg, apply_quiz_action(session, action)).await
}

async fn cheat_screen(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    (snapshot, exchange): (SessionSnapshot, CheatExchange),
    msg: Message,
) -> HandlerResult {
    debug!("Chat {}: cheat screen input", msg.chat.id.0);
    let action = msg.text().and_then(CheatAction::parse);
    let transition = apply_cheat_action(bank, snapshot, exchange, action);
    send_transition(&bot, &dialogue, &msg, transition).await
}
