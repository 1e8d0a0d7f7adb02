use super::*;
use rpsx_commit::Commitment;
use rpsx_commit::Entropy;
use rpsx_commit::SecretKey;
use rpsx_rules::Actor;
use rpsx_rules::Choice;
use rpsx_rules::Move;
use rpsx_rules::Moves;
use rpsx_rules::Table;

/// How a session ended.
#[derive(Debug, Clone)]
pub enum Ending {
    /// The user left before moving; nothing was revealed.
    Exited,
    /// The user moved; result and key were revealed.
    Resolved(Resolution),
}

/// A single game with the computer's move locked in.
///
/// Exists only between commitment and reveal. The key and the computer's
/// move are private; the only way to see them is to consume the session
/// with [`Session::resolve`].
pub struct Session {
    moves: Moves,
    key: SecretKey,
    computer: Choice,
    commitment: Commitment,
}

impl Session {
    /// Draws a fresh key, lets `opponent` pick, and commits to the pick.
    ///
    /// Fails only if `entropy` does; the opponent is not consulted then.
    pub fn open(
        moves: Moves,
        entropy: &mut impl Entropy,
        opponent: &mut impl Opponent,
    ) -> Result<Self, SessionError> {
        let key = SecretKey::generate(entropy)?;
        let index = opponent.pick(&moves);
        let computer = Choice::from((Actor::Computer, index));
        let commitment = Commitment::commit(&key, moves.name(index));
        log::info!("committed to computer move over {} moves: {}", moves.len(), commitment);
        Ok(Self {
            moves,
            key,
            computer,
            commitment,
        })
    }
    pub fn moves(&self) -> &Moves {
        &self.moves
    }
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
    /// Scores `user` against the committed move and reveals the key.
    pub fn resolve(self, user: Move) -> Resolution {
        let user = Choice::from((Actor::User, user));
        let resolution = Resolution::new(
            self.moves,
            user,
            self.computer,
            self.key,
            self.commitment,
        );
        log::info!(
            "resolved: {} vs {}, user {}",
            resolution.user_move(),
            resolution.computer_move(),
            resolution.outcome()
        );
        resolution
    }
    /// Publishes the commitment and menu, then reads input until the user
    /// moves or leaves.
    ///
    /// `?` and unparseable input re-prompt without using up the turn. End
    /// of input counts as leaving.
    pub fn run(self, console: &mut impl Console) -> Result<Ending, SessionError> {
        console.notify(&Event::Committed(&self.commitment))?;
        console.notify(&Event::Menu(&self.moves))?;
        loop {
            let Some(line) = console.read()? else {
                log::info!("input closed before a move was made");
                console.notify(&Event::Exited)?;
                return Ok(Ending::Exited);
            };
            match Command::parse(&line, &self.moves) {
                Ok(Command::Exit) => {
                    log::info!("user exited before moving");
                    console.notify(&Event::Exited)?;
                    return Ok(Ending::Exited);
                }
                Ok(Command::Help) => {
                    log::debug!("showing outcome table");
                    console.notify(&Event::Help(Table::from(&self.moves)))?;
                }
                Ok(Command::Play(user)) => {
                    let resolution = self.resolve(user);
                    console.notify(&Event::Resolved(&resolution))?;
                    return Ok(Ending::Resolved(resolution));
                }
                Err(e) => {
                    log::debug!("rejected input: {}", e);
                    console.notify(&Event::Rejected(&e))?;
                }
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("moves", &self.moves)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Validates `names`, opens a session, and runs it on `console`.
///
/// A rejected move set returns [`SessionError::Rules`] before `entropy`
/// or `opponent` is touched.
pub fn play(
    names: Vec<String>,
    entropy: &mut impl Entropy,
    opponent: &mut impl Opponent,
    console: &mut impl Console,
) -> Result<Ending, SessionError> {
    let moves = Moves::try_from(names)?;
    Session::open(moves, entropy, opponent)?.run(console)
}
