//! Built-in mnemonic name → Unicode symbol pairs
//!
//! This is the default table compiled into the crate. Entries are kept as an
//! ordered slice rather than a map so that table construction preserves
//! insertion order (listing and completion output depend on it) and so that
//! user-supplied overrides can be layered on top with last-write-wins
//! semantics.

/// Default canonical name → symbol pairs, in definition order.
pub static DEFAULT_SYMBOLS: &[(&str, &str)] = &[
    // Greek lowercase
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("zeta", "ζ"),
    ("eta", "η"),
    ("theta", "θ"),
    ("iota", "ι"),
    ("kappa", "κ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("nu", "ν"),
    ("xi", "ξ"),
    ("omicron", "ο"),
    ("pi", "π"),
    ("rho", "ρ"),
    ("sigma", "σ"),
    ("varsigma", "ς"),
    ("tau", "τ"),
    ("upsilon", "υ"),
    ("phi", "φ"),
    ("varphi", "ϕ"),
    ("chi", "χ"),
    ("psi", "ψ"),
    ("omega", "ω"),

    // Greek uppercase
    ("Gamma", "Γ"),
    ("Delta", "Δ"),
    ("Theta", "Θ"),
    ("Lambda", "Λ"),
    ("Xi", "Ξ"),
    ("Pi", "Π"),
    ("Sigma", "Σ"),
    ("Upsilon", "Υ"),
    ("Phi", "Φ"),
    ("Psi", "Ψ"),
    ("Omega", "Ω"),

    // Arrows
    ("leftarrow", "←"),
    ("uparrow", "↑"),
    ("rightarrow", "→"),
    ("downarrow", "↓"),
    ("leftrightarrow", "↔"),
    ("updownarrow", "↕"),
    ("nwarrow", "↖"),
    ("nearrow", "↗"),
    ("searrow", "↘"),
    ("swarrow", "↙"),
    ("mapsto", "↦"),
    ("hookleftarrow", "↩"),
    ("hookrightarrow", "↪"),
    ("twoheadleftarrow", "↞"),
    ("twoheadrightarrow", "↠"),
    ("Leftarrow", "⇐"),
    ("Uparrow", "⇑"),
    ("Rightarrow", "⇒"),
    ("Downarrow", "⇓"),
    ("Leftrightarrow", "⇔"),
    ("Updownarrow", "⇕"),
    ("longleftarrow", "⟵"),
    ("longrightarrow", "⟶"),
    ("longleftrightarrow", "⟷"),
    ("Longleftarrow", "⟸"),
    ("Longrightarrow", "⟹"),
    ("Longleftrightarrow", "⟺"),
    ("longmapsto", "⟼"),
    ("leadsto", "⇝"),

    // Relations
    ("le", "≤"),
    ("ge", "≥"),
    ("ne", "≠"),
    ("equiv", "≡"),
    ("nequiv", "≢"),
    ("approx", "≈"),
    ("sim", "∼"),
    ("simeq", "≃"),
    ("cong", "≅"),
    ("ll", "≪"),
    ("gg", "≫"),
    ("prec", "≺"),
    ("succ", "≻"),
    ("preceq", "⪯"),
    ("succeq", "⪰"),
    ("propto", "∝"),
    ("asymp", "≍"),
    ("doteq", "≐"),
    ("triangleq", "≜"),

    // Set theory
    ("emptyset", "∅"),
    ("in", "∈"),
    ("notin", "∉"),
    ("ni", "∋"),
    ("subset", "⊂"),
    ("supset", "⊃"),
    ("subseteq", "⊆"),
    ("supseteq", "⊇"),
    ("nsubseteq", "⊈"),
    ("nsupseteq", "⊉"),
    ("subsetneq", "⊊"),
    ("supsetneq", "⊋"),
    ("cap", "∩"),
    ("cup", "∪"),
    ("uplus", "⊎"),
    ("sqcap", "⊓"),
    ("sqcup", "⊔"),
    ("setminus", "∖"),

    // Logic
    ("forall", "∀"),
    ("exists", "∃"),
    ("nexists", "∄"),
    ("neg", "¬"),
    ("wedge", "∧"),
    ("vee", "∨"),
    ("veebar", "⊻"),
    ("top", "⊤"),
    ("bot", "⊥"),
    ("vdash", "⊢"),
    ("dashv", "⊣"),
    ("vDash", "⊨"),
    ("Vdash", "⊩"),
    ("nvdash", "⊬"),
    ("nvDash", "⊭"),
    ("therefore", "∴"),
    ("because", "∵"),

    // Operators
    ("pm", "±"),
    ("mp", "∓"),
    ("times", "×"),
    ("div", "÷"),
    ("cdot", "⋅"),
    ("ast", "∗"),
    ("star", "⋆"),
    ("circ", "∘"),
    ("bullet", "•"),
    ("oplus", "⊕"),
    ("ominus", "⊖"),
    ("otimes", "⊗"),
    ("oslash", "⊘"),
    ("odot", "⊙"),
    ("dagger", "†"),
    ("ddagger", "‡"),
    ("wr", "≀"),
    ("diamond", "⋄"),

    // Calculus and big operators
    ("sum", "∑"),
    ("prod", "∏"),
    ("coprod", "∐"),
    ("int", "∫"),
    ("iint", "∬"),
    ("iiint", "∭"),
    ("oint", "∮"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("infty", "∞"),
    ("sqrt", "√"),
    ("cbrt", "∛"),
    ("bigcap", "⋂"),
    ("bigcup", "⋃"),
    ("bigwedge", "⋀"),
    ("bigvee", "⋁"),
    ("bigoplus", "⨁"),
    ("bigotimes", "⨂"),

    // Number sets (blackboard bold)
    ("bbN", "ℕ"),
    ("bbZ", "ℤ"),
    ("bbQ", "ℚ"),
    ("bbR", "ℝ"),
    ("bbC", "ℂ"),
    ("bbH", "ℍ"),
    ("bbP", "ℙ"),

    // Script and misc letters
    ("ell", "ℓ"),
    ("hbar", "ℏ"),
    ("Re", "ℜ"),
    ("Im", "ℑ"),
    ("aleph", "ℵ"),
    ("beth", "ℶ"),
    ("wp", "℘"),

    // Delimiters
    ("langle", "⟨"),
    ("rangle", "⟩"),
    ("lceil", "⌈"),
    ("rceil", "⌉"),
    ("lfloor", "⌊"),
    ("rfloor", "⌋"),
    ("llbracket", "⟦"),
    ("rrbracket", "⟧"),

    // Dots and punctuation
    ("ldots", "…"),
    ("cdots", "⋯"),
    ("vdots", "⋮"),
    ("ddots", "⋱"),
    ("prime", "′"),
    ("dprime", "″"),
    ("degree", "°"),
    ("angle", "∠"),
    ("measuredangle", "∡"),

    // Miscellaneous
    ("checkmark", "✓"),
    ("cross", "✗"),
    ("flat", "♭"),
    ("natural", "♮"),
    ("sharp", "♯"),
    ("clubsuit", "♣"),
    ("diamondsuit", "♢"),
    ("heartsuit", "♡"),
    ("spadesuit", "♠"),
    ("triangle", "△"),
    ("square", "□"),
    ("blacksquare", "■"),
    ("lozenge", "◊"),
    ("euro", "€"),
    ("pounds", "£"),
    ("yen", "¥"),
    ("copyright", "©"),
    ("registered", "®"),
    ("trademark", "™"),
    ("section", "§"),
    ("paragraph", "¶"),
];
