//! Word-boundary-preferring splitter for messages above Telegram's size limit.
//!
//! Sizes are counted in UTF-16 code units, the unit Telegram's message limit
//! is enforced in. Characters outside the Basic Multilingual Plane (most
//! emoji) count as two. The packer is greedy: it fills each chunk as far as
//! the next token allows and never looks ahead to balance chunk sizes.

/// Length of `text` as Telegram measures it.
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Split `text` into ordered chunks of at most `max_chunk_size` UTF-16 units.
///
/// Text is tokenized into alternating whitespace and non-whitespace runs and
/// packed greedily. A single token longer than `max_chunk_size` is cut into
/// slices of `max_chunk_size` units on character boundaries; a slice is one
/// unit short when the next character is a surrogate pair that would
/// straddle the limit. Every returned chunk is trimmed and non-empty.
///
/// # Examples
///
/// ```
/// use pingrelay::telegram::chunker::split_into_chunks;
///
/// let chunks = split_into_chunks("alpha beta gamma", 10);
/// assert_eq!(chunks, vec!["alpha beta", "gamma"]);
/// ```
#[must_use]
pub fn split_into_chunks(text: &str, max_chunk_size: usize) -> Vec<String> {
    if max_chunk_size == 0 || text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for token in tokenize(text) {
        let token_len = text_length(token);

        if buffer_len + token_len > max_chunk_size {
            push_trimmed(&mut chunks, &buffer);
            buffer.clear();
            buffer_len = 0;

            if token_len > max_chunk_size {
                for slice in hard_split(token, max_chunk_size) {
                    push_trimmed(&mut chunks, slice);
                }
            } else {
                buffer.push_str(token);
                buffer_len = token_len;
            }
        } else {
            buffer.push_str(token);
            buffer_len += token_len;
        }
    }

    push_trimmed(&mut chunks, &buffer);
    chunks
}

/// Runs of whitespace and non-whitespace, in order. Concatenating the
/// tokens yields `text` again.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut current_ws: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match current_ws {
            Some(prev) if prev != is_ws => {
                tokens.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        current_ws = Some(is_ws);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Cut `token` into slices of at most `size` UTF-16 units on char
/// boundaries. A slice always holds at least one character.
fn hard_split(token: &str, size: usize) -> Vec<&str> {
    let mut slices = Vec::new();
    let mut start = 0usize;
    let mut slice_len = 0usize;

    for (idx, ch) in token.char_indices() {
        let ch_len = ch.len_utf16();
        if slice_len > 0 && slice_len + ch_len > size {
            slices.push(&token[start..idx]);
            start = idx;
            slice_len = 0;
        }
        slice_len += ch_len;
    }

    if start < token.len() {
        slices.push(&token[start..]);
    }
    slices
}

fn push_trimmed(chunks: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
