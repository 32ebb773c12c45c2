use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    chart-harvest completions bash > ~/.bash_completion.d/chart-harvest\n\n\
                  Generate zsh completions:\n    chart-harvest completions zsh > ~/.zfunc/_chart-harvest\n\n\
                  Generate fish completions:\n    chart-harvest completions fish > ~/.config/fish/completions/chart-harvest.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
