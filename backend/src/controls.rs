use axum::extract::FromRequestParts;
use common::Palette;

/// Control selections remembered for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Controls {
    pub player: Option<String>,
    pub palette: Option<Palette>,
}

impl Controls {
    pub fn palette(&self) -> Palette {
        self.palette.unwrap_or_default()
    }

    /// The stored player if it is one of `options`, otherwise the first option.
    pub fn player_in<'o>(&self, options: &'o [String]) -> Option<&'o String> {
        self.player
            .as_ref()
            .and_then(|p| options.iter().find(|o| *o == p))
            .or_else(|| options.first())
    }
}

pub struct ControlSession {
    pub session: tower_sessions::Session,
    data: Controls,
}

impl ControlSession {
    const KEY: &'static str = "dashboard.controls";

    pub fn data(&self) -> &Controls {
        &self.data
    }

    pub async fn modify_data<F>(&mut self, func: F) -> Result<(), tower_sessions::session::Error>
    where
        F: FnOnce(&mut Controls),
    {
        func(&mut self.data);

        self.session.insert(Self::KEY, &self.data).await
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for ControlSession
where
    S: Send + Sync,
{
    type Rejection = (axum::http::StatusCode, &'static str);

    async fn from_request_parts(
        req: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = tower_sessions::Session::from_request_parts(req, state).await?;

        let data: Controls = session
            .get(Self::KEY)
            .await
            .map_err(|e| {
                tracing::error!("Loading session controls: {:?}", e);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not load session",
                )
            })?
            .unwrap_or_default();

        Ok(Self { session, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_falls_back_to_first_option() {
        let options = vec!["alice".to_owned(), "bob".to_owned()];

        let none = Controls::default();
        assert_eq!(none.player_in(&options), Some(&options[0]));

        let bob = Controls {
            player: Some("bob".to_owned()),
            palette: None,
        };
        assert_eq!(bob.player_in(&options), Some(&options[1]));

        let gone = Controls {
            player: Some("mallory".to_owned()),
            palette: None,
        };
        assert_eq!(gone.player_in(&options), Some(&options[0]));
        assert_eq!(gone.player_in(&[]), None);
    }

    #[test]
    fn default_palette() {
        assert_eq!(Controls::default().palette(), Palette::Viridis);
    }
}
