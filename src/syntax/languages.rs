//! The language profile registry.
//!
//! A static table of immutable profiles, selected once per document by
//! filename. A dot-prefixed pattern matches the file extension exactly; any
//! other pattern matches as a substring of the filename. The first matching
//! entry in declaration order wins.

/// Keyword classification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTier {
    /// Flow control, declarations and the like.
    Primary,
    /// Builtin types and other secondary vocabulary.
    Secondary,
}

/// One keyword of a language profile.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub text: &'static str,
    pub tier: KeywordTier,
}

const fn kw(text: &'static str) -> Keyword {
    Keyword {
        text,
        tier: KeywordTier::Primary,
    }
}

const fn kw2(text: &'static str) -> Keyword {
    Keyword {
        text,
        tier: KeywordTier::Secondary,
    }
}

/// An immutable language profile.
#[derive(Debug)]
pub struct Syntax {
    /// Display name shown in the status bar.
    pub filetype: &'static str,
    /// Filename patterns: `.ext` for extension match, anything else for a
    /// substring match.
    pub filematch: &'static [&'static str],
    pub keywords: &'static [Keyword],
    pub singleline_comment: Option<&'static str>,
    pub block_comment_start: Option<&'static str>,
    pub block_comment_end: Option<&'static str>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

static C_KEYWORDS: &[Keyword] = &[
    kw("switch"),
    kw("if"),
    kw("while"),
    kw("for"),
    kw("break"),
    kw("continue"),
    kw("return"),
    kw("else"),
    kw("struct"),
    kw("union"),
    kw("typedef"),
    kw("static"),
    kw("enum"),
    kw("class"),
    kw("case"),
    kw2("int"),
    kw2("long"),
    kw2("double"),
    kw2("float"),
    kw2("char"),
    kw2("unsigned"),
    kw2("signed"),
    kw2("void"),
];

static RUST_KEYWORDS: &[Keyword] = &[
    kw("fn"),
    kw("let"),
    kw("mut"),
    kw("match"),
    kw("if"),
    kw("else"),
    kw("while"),
    kw("for"),
    kw("loop"),
    kw("break"),
    kw("continue"),
    kw("return"),
    kw("struct"),
    kw("enum"),
    kw("impl"),
    kw("trait"),
    kw("pub"),
    kw("use"),
    kw("mod"),
    kw("const"),
    kw("static"),
    kw("move"),
    kw("ref"),
    kw("where"),
    kw("unsafe"),
    kw("as"),
    kw("in"),
    kw("crate"),
    kw2("bool"),
    kw2("char"),
    kw2("str"),
    kw2("String"),
    kw2("Vec"),
    kw2("Option"),
    kw2("Result"),
    kw2("Box"),
    kw2("i8"),
    kw2("i16"),
    kw2("i32"),
    kw2("i64"),
    kw2("u8"),
    kw2("u16"),
    kw2("u32"),
    kw2("u64"),
    kw2("usize"),
    kw2("isize"),
    kw2("f32"),
    kw2("f64"),
];

static HTML_KEYWORDS: &[Keyword] = &[
    kw("html"),
    kw("head"),
    kw("body"),
    kw("div"),
    kw("span"),
    kw("ul"),
    kw("ol"),
    kw("li"),
    kw("title"),
    kw("a"),
    kw("link"),
    kw("script"),
    kw("h1"),
    kw("h2"),
    kw("h3"),
    kw("h4"),
    kw("h5"),
    kw("h6"),
    kw2("href"),
    kw2("src"),
    kw2("type"),
    kw2("rel"),
    kw2("id"),
    kw2("class"),
    kw2("onmouseover"),
    kw2("onmouseleave"),
];

static FISH_KEYWORDS: &[Keyword] = &[
    kw("function"),
    kw("end"),
    kw("set"),
    kw("switch"),
    kw("case"),
    kw("return"),
    kw("while"),
    kw("if"),
    kw("else"),
];

static JAVASCRIPT_KEYWORDS: &[Keyword] = &[
    kw("break"),
    kw("case"),
    kw("catch"),
    kw("class"),
    kw("const"),
    kw("continue"),
    kw("debugger"),
    kw("default"),
    kw("delete"),
    kw("do"),
    kw("else"),
    kw("enum"),
    kw("export"),
    kw("extends"),
    kw("finally"),
    kw("for"),
    kw("function"),
    kw("if"),
    kw("implements"),
    kw("import"),
    kw("in"),
    kw("instanceof"),
    kw("interface"),
    kw("let"),
    kw("new"),
    kw("package"),
    kw("private"),
    kw("protected"),
    kw("public"),
    kw("return"),
    kw("static"),
    kw("super"),
    kw("switch"),
    kw("this"),
    kw("throw"),
    kw("try"),
    kw("typeof"),
    kw("var"),
    kw("void"),
    kw("while"),
    kw("with"),
    kw("yield"),
    kw("true"),
    kw("false"),
    kw("null"),
    kw("NaN"),
    kw("global"),
    kw("window"),
    kw("prototype"),
    kw("constructor"),
    kw("document"),
    kw("isNaN"),
    kw("arguments"),
    kw("undefined"),
    kw2("Infinity"),
    kw2("Array"),
    kw2("Object"),
    kw2("Number"),
    kw2("String"),
    kw2("Boolean"),
    kw2("Function"),
    kw2("ArrayBuffer"),
    kw2("DataView"),
    kw2("Float32Array"),
    kw2("Float64Array"),
    kw2("Int8Array"),
    kw2("Int16Array"),
    kw2("Int32Array"),
    kw2("Uint8Array"),
    kw2("Uint8ClampedArray"),
    kw2("Uint32Array"),
    kw2("Date"),
    kw2("Error"),
    kw2("Map"),
    kw2("RegExp"),
    kw2("Symbol"),
    kw2("WeakMap"),
    kw2("WeakSet"),
    kw2("Set"),
];

static MUMPS_KEYWORDS: &[Keyword] = &[
    kw("n"),
    kw("f"),
    kw("w"),
    kw("s"),
    kw("r"),
    kw("d"),
    kw("k"),
    kw("i"),
    kw("e"),
    kw("o"),
    kw("c"),
    kw("u"),
    kw("q"),
    kw("h"),
    kw("b"),
    kw("g"),
    kw("new"),
    kw("for"),
    kw("while"),
    kw("set"),
    kw("read"),
    kw("do"),
    kw("kill"),
    kw("if"),
    kw("else"),
    kw("open"),
    kw("close"),
    kw("use"),
    kw("quit"),
    kw("halt"),
    kw("hang"),
    kw("break"),
    kw("goto"),
];

static PHP_KEYWORDS: &[Keyword] = &[
    kw("if"),
    kw("else"),
    kw("elseif"),
    kw("while"),
    kw("for"),
    kw("return"),
    kw("class"),
    kw("function"),
    kw("public"),
    kw("private"),
    kw("extends"),
    kw("use"),
    kw("namespace"),
];

static RUBY_KEYWORDS: &[Keyword] = &[
    kw("def"),
    kw("end"),
    kw("require"),
    kw("if"),
    kw("elsif"),
    kw("else"),
    kw("for"),
    kw("in"),
    kw("while"),
    kw("do"),
    kw("begin"),
    kw("until"),
    kw("then"),
    kw("break"),
    kw("redo"),
    kw("rescue"),
    kw("class"),
    kw("module"),
    kw("return"),
];

static VIMSCRIPT_KEYWORDS: &[Keyword] = &[
    kw("function"),
    kw("endfunction"),
    kw("if"),
    kw("else"),
    kw("endif"),
    kw("while"),
    kw("endwhile"),
    kw("let"),
    kw("set"),
    kw("wincmd"),
    kw("autocmd"),
    kw("execute"),
    kw("colo"),
    kw("silent"),
    kw("map"),
    kw("nmap"),
    kw("nnoremap"),
    kw("syntax"),
    kw("return"),
    kw2("tabstop"),
    kw2("expandtab"),
    kw2("shiftwidth"),
    kw2("number"),
    kw2("showmap"),
    kw2("mouse"),
    kw2("splitbelow"),
    kw2("splitright"),
    kw2("hlsearch"),
    kw2("incsearch"),
    kw2("switchbuf"),
    kw2("laststatus"),
    kw2("clipboard"),
    kw2("showmatch"),
];

/// All language profiles, in selection priority order.
pub static SYNTAXES: &[Syntax] = &[
    Syntax {
        filetype: "c",
        filematch: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        singleline_comment: Some("//"),
        block_comment_start: Some("/*"),
        block_comment_end: Some("*/"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "rust",
        filematch: &[".rs"],
        keywords: RUST_KEYWORDS,
        singleline_comment: Some("//"),
        block_comment_start: Some("/*"),
        block_comment_end: Some("*/"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "html",
        filematch: &[".html"],
        keywords: HTML_KEYWORDS,
        singleline_comment: Some("<!--"),
        block_comment_start: Some("<!--"),
        block_comment_end: Some("-->"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "fish",
        filematch: &[".fish"],
        keywords: FISH_KEYWORDS,
        singleline_comment: Some("#"),
        block_comment_start: None,
        block_comment_end: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "javascript",
        filematch: &[".js"],
        keywords: JAVASCRIPT_KEYWORDS,
        singleline_comment: Some("//"),
        block_comment_start: Some("/*"),
        block_comment_end: Some("*/"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "mumps",
        filematch: &[".m", ".mps"],
        keywords: MUMPS_KEYWORDS,
        singleline_comment: Some(";"),
        block_comment_start: None,
        block_comment_end: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "php",
        filematch: &[".php"],
        keywords: PHP_KEYWORDS,
        singleline_comment: Some("//"),
        block_comment_start: Some("/*"),
        block_comment_end: Some("*/"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "ruby",
        filematch: &[".rb"],
        keywords: RUBY_KEYWORDS,
        singleline_comment: Some("#"),
        block_comment_start: Some("=begin"),
        block_comment_end: Some("=end"),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Syntax {
        filetype: "vim",
        filematch: &[".vim", "vimrc"],
        keywords: VIMSCRIPT_KEYWORDS,
        singleline_comment: Some("\""),
        block_comment_start: None,
        block_comment_end: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Select the profile for `filename`, or None for an unrecognized file.
pub fn select_syntax(filename: &str) -> Option<&'static Syntax> {
    let extension = filename.rfind('.').map(|at| &filename[at..]);

    for syntax in SYNTAXES {
        for pattern in syntax.filematch {
            let is_extension = pattern.starts_with('.');
            let matched = if is_extension {
                extension == Some(pattern)
            } else {
                filename.contains(pattern)
            };
            if matched {
                return Some(syntax);
            }
        }
    }
    None
}
