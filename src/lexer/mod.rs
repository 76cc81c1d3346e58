use lachs::Span;

#[lachs::token]
pub enum Token {
    #[literal("'[a-zA-Z_][a-zA-Z0-9_']*")]
    Var,
    #[literal("[a-zA-Z_][a-zA-Z0-9_']*(\\.[a-zA-Z_][a-zA-Z0-9_']*)*")]
    Ident,
    #[terminal("->")]
    Arrow,
    #[terminal("*")]
    Star,
    #[terminal(",")]
    Comma,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("?")]
    Question,
    #[terminal("~")]
    Tilde,
    #[terminal(":")]
    Colon,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Var(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::Question(inner) => inner.position.clone(),
            Token::Tilde(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Var(inner) => format!("type variable '{}'", inner.value),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Arrow(_) => "'->'".to_string(),
            Token::Star(_) => "'*'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::Question(_) => "'?'".to_string(),
            Token::Tilde(_) => "'~'".to_string(),
            Token::Colon(_) => "':'".to_string(),
        }
    }
}
