//! HTML 토큰 스트림.
//!
//! html5ever 토크나이저만 사용하고 트리 빌더는 사용하지 않습니다.
//! 트리 빌더는 `<table>` 밖의 `<tbody>`, `<tr>`, `<td>`를 버리기 때문입니다.
//!
//! 트리 빌더가 하던 raw text 전환은 sink가 대신합니다. `<script>`, `<style>`,
//! `<textarea>`, `<title>` 내용은 태그로 쪼개지지 않고 하나의 텍스트 토큰이 됩니다.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};

/// 구조 검증이 없는 HTML 어휘 이벤트.
///
/// 태그와 속성 이름은 소문자입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
    Start {
        name: String,
        attrs: Vec<(String, String)>,
    },
    End {
        name: String,
    },
    Text(String),
}

impl HtmlToken {
    pub fn is_start(&self, tag: &str) -> bool {
        matches!(self, HtmlToken::Start { name, .. } if name == tag)
    }

    pub fn is_end(&self, tag: &str) -> bool {
        matches!(self, HtmlToken::End { name } if name == tag)
    }

    /// 시작 태그의 속성 값.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            HtmlToken::Start { attrs, .. } => attrs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

#[derive(Default)]
struct TokenCollector {
    tokens: Vec<HtmlToken>,
}

impl TokenSink for TokenCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs = tag
                            .attrs
                            .into_iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect();
                        let raw_kind = if tag.self_closing {
                            None
                        } else {
                            raw_text_kind(&name)
                        };
                        self.tokens.push(HtmlToken::Start { name, attrs });
                        if let Some(kind) = raw_kind {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                    TagKind::EndTag => self.tokens.push(HtmlToken::End { name }),
                }
            }
            Token::CharacterTokens(text) => match self.tokens.last_mut() {
                // 토크나이저가 텍스트를 여러 조각으로 나눠 보낼 수 있음
                Some(HtmlToken::Text(prev)) => prev.push_str(&text),
                _ => self.tokens.push(HtmlToken::Text(text.to_string())),
            },
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// 내용을 마크업으로 해석하지 않는 요소.
fn raw_text_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "textarea" | "title" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// HTML 텍스트를 순방향 토큰 목록으로 변환합니다.
pub fn tokenize(html: &str) -> Vec<HtmlToken> {
    let mut tokenizer = Tokenizer::new(TokenCollector::default(), TokenizerOpts::default());
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    // sink가 Script를 돌려주지 않으므로 Done 외의 결과는 나오지 않지만,
    // 나오더라도 남은 입력을 계속 처리합니다.
    while let TokenizerResult::Script(()) = tokenizer.feed(&mut input) {}
    tokenizer.end();

    tokenizer.sink.tokens
}
