/// Drawn under the steam. Its rim lines up under the default 71-column grid.
pub(crate) const CUP: &str = r#"
                    .:-----====----------------:.                     
                 .:=-===++--:::-===========+=------:                  
                ::==+===-==:::::-:.:--:--:::--===----:                
               .:++===:..--:::::::::::..--....:-==--+.:               
               .=:=+==-::.::::::::::::::-:.....:===-:-=::....:        
                :.:--=+==--::::...........:::-==+=-----. .... :.      
              :-=   :::---==+++==------==++==---:::..=..:   .: -      
          .-=-:.-        .....::--------::.....   ...=.+-:  :: -      
        .=-:.....-                                ..=.=..:+-. :.      
       -=:.......:-                              ..-::----. :=        
      -=........  .-                            ..-:  .  ::-.=-       
      -=......      :.                          :-.::::::.....-:      
      --:....        .:.                      :-.::.     ....:-:      
       ---..           ==:                  :=-          ...:--       
        .---.           .-=-::.        .::-=-.          ..:--:        
          -==-:.           .::--======--::.            ::-=-          
            :-=-=-::.                             .::-=-=-            
               ::-=:----::.......     .......::-----=-:.              
                   .::::--:::::---------:::::--::::.                  
                          ...::::::::::::....                        "#;

pub(crate) fn lines() -> impl Iterator<Item = &'static str> {
    // the leading newline only separates the asset from the steam
    CUP.strip_prefix('\n').unwrap_or(CUP).lines()
}
