// Router state - current route and history
use crate::error::{FolioError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    ProjectList,
    ProjectDetail(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Home,
    ProjectList,
    ProjectDetail,
}

impl Route {
    pub fn kind(&self) -> RouteKind {
        match self {
            Self::Home => RouteKind::Home,
            Self::ProjectList => RouteKind::ProjectList,
            Self::ProjectDetail(_) => RouteKind::ProjectDetail,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::ProjectList => "/projects".to_string(),
            Self::ProjectDetail(id) => format!("/project/{}", id),
        }
    }

    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Ok(Self::Home),
            "/projects" => Ok(Self::ProjectList),
            _ => match trimmed.strip_prefix("/project/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Ok(Self::ProjectDetail(id.to_string()))
                }
                _ => Err(FolioError::UnknownRoute(path.to_string())),
            },
        }
    }
}

pub struct Router {
    current: Route,
    history: Vec<Route>,
    history_index: usize,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Returns false when `route` is already current.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        // Remove any forward history when navigating to a new route
        self.history.truncate(self.history_index + 1);
        self.history.push(route.clone());
        self.history_index += 1;
        self.current = route;
        true
    }

    /// Swap the current entry without growing history (redirects).
    pub fn replace(&mut self, route: Route) {
        self.history[self.history_index] = route.clone();
        self.current = route;
    }

    pub fn go_back(&mut self) -> Option<Route> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<Route> {
        if self.history_index < self.history.len() - 1 {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
            Some(self.current.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/projects").unwrap(), Route::ProjectList);
        assert_eq!(Route::parse("/projects/").unwrap(), Route::ProjectList);
        assert_eq!(
            Route::parse("/project/lemon-dapp").unwrap(),
            Route::ProjectDetail("lemon-dapp".to_string())
        );
        assert!(Route::parse("/project/").is_err());
        assert!(Route::parse("/project/a/b").is_err());
        assert!(Route::parse("/about").is_err());
    }

    #[test]
    fn test_path_matches_parse() {
        for route in [
            Route::Home,
            Route::ProjectList,
            Route::ProjectDetail("wlh-grandes-alturas".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_history() {
        let mut router = Router::new(Route::Home);
        assert!(router.push(Route::ProjectList));
        assert!(router.push(Route::ProjectDetail("a".to_string())));
        assert!(!router.push(Route::ProjectDetail("a".to_string())));

        assert_eq!(router.go_back(), Some(Route::ProjectList));
        assert_eq!(router.go_back(), Some(Route::Home));
        assert_eq!(router.go_back(), None);
        assert_eq!(router.go_forward(), Some(Route::ProjectList));

        // New navigation drops forward entries
        router.push(Route::ProjectDetail("b".to_string()));
        assert_eq!(router.go_forward(), None);
        assert_eq!(router.current().kind(), RouteKind::ProjectDetail);
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let mut router = Router::new(Route::Home);
        router.push(Route::ProjectDetail("missing".to_string()));
        router.replace(Route::Home);
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.go_back(), Some(Route::Home));
        assert_eq!(router.go_back(), None);
    }
}
